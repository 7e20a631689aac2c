// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::form::ExistingEvent;

/// Tracks which event, if any, is currently being edited.
///
/// Owned by the caller and handed to forms as explicit context; other
/// components read it to decide between edit and create mode, and the form's
/// completion callback clears it after a successful submission.
#[derive(Debug, Default)]
pub struct EditSelection {
    selected: Option<ExistingEvent>,
}

impl EditSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `event` as the one being edited.
    pub fn select(&mut self, event: ExistingEvent) {
        self.selected = Some(event);
    }

    /// The event currently being edited, if any.
    pub fn current(&self) -> Option<&ExistingEvent> {
        self.selected.as_ref()
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use super::*;

    fn existing(id: &str) -> ExistingEvent {
        ExistingEvent {
            id: id.to_string(),
            time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_select_and_clear() {
        let mut selection = EditSelection::new();
        assert!(!selection.is_editing());
        assert_eq!(selection.current(), None);

        selection.select(existing("evt-1"));
        assert!(selection.is_editing());
        assert_eq!(selection.current().unwrap().id, "evt-1");

        selection.clear();
        assert!(!selection.is_editing());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = EditSelection::new();
        selection.select(existing("evt-1"));
        selection.select(existing("evt-2"));
        assert_eq!(selection.current().unwrap().id, "evt-2");
    }

    #[test]
    fn test_cleared_through_shared_completion_callback() {
        // The shape the CLI uses: the selection behind Arc<Mutex<_>>, cleared
        // by the form's completion callback.
        let selection = Arc::new(Mutex::new(EditSelection::new()));
        selection.lock().unwrap().select(existing("evt-1"));

        let shared = selection.clone();
        let mut on_complete = move || shared.lock().unwrap().clear();
        on_complete();

        assert!(!selection.lock().unwrap().is_editing());
    }
}
