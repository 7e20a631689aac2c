// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};

use crate::datetime::{DateTimeError, combine_local, local_date_string, local_time_string};
use crate::event::{EventFields, PayloadMeta};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A user-facing notice pushed to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
}

impl Notice {
    /// A success notice with no description.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Success,
        }
    }

    /// An error notice carrying a human-readable message.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Boxed error carried back from persistence callbacks.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Persistence seam for one event variant.
///
/// Implementations accept a submission-ready payload and resolve with the
/// server-confirmed event or reject with a descriptive failure.
#[async_trait::async_trait]
pub trait EventSink<P: Send>: Send + Sync {
    /// Persists a new event.
    async fn create(&self, payload: P) -> Result<P, SinkError>;

    /// Persists changes to an existing event.
    async fn update(&self, payload: P) -> Result<P, SinkError>;
}

/// The event being edited, handed to the form as explicit context.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingEvent {
    pub id: String,
    pub time_start: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Mutable form state, owned exclusively by one active form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    /// Calendar date in `YYYY-MM-DD` form, local calendar.
    pub date: String,

    /// Wall-clock time in `HH:MM` 24-hour form, local.
    pub time: String,

    /// Free-form notes.
    pub notes: Option<String>,

    /// Variant-specific form fields.
    pub fields: F,
}

/// Errors caught by the submit operation.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The date or time field failed to parse.
    #[error(transparent)]
    Input(#[from] DateTimeError),

    /// The persistence callback rejected the submission.
    #[error("{0}")]
    Persistence(String),
}

/// What a submission attempt amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The event was persisted and the caller notified.
    Saved,

    /// The submission was rejected or failed; the state is untouched so the
    /// user may retry.
    Failed,
}

#[derive(Debug, Clone)]
enum Mode {
    Create,
    Edit { id: String },
}

type SubmittedHook<F> = Box<dyn FnMut(&FormState<F>) + Send>;
type CompleteHook = Box<dyn FnMut() + Send>;

/// Controller for a create-or-edit event form.
///
/// Owns the reactive submission state, combines the separately edited date
/// and time fields into a single start instant, delegates persistence to the
/// injected sink and reports the outcome through the notifier.
pub struct EventForm<F, S, N>
where
    F: EventFields + Clone + Send,
    F::Payload: Send,
    S: EventSink<F::Payload>,
    N: Notifier,
{
    mode: Mode,
    state: FormState<F>,
    is_loading: bool,
    sink: S,
    notifier: N,
    on_submitted: Option<SubmittedHook<F>>,
    on_complete: Option<CompleteHook>,
}

impl<F, S, N> EventForm<F, S, N>
where
    F: EventFields + Clone + Send,
    F::Payload: Send,
    S: EventSink<F::Payload>,
    N: Notifier,
{
    /// A form for recording a new event; date and time are prefilled from `now`.
    pub fn create(fields: F, notes: Option<String>, now: DateTime<Utc>, sink: S, notifier: N) -> Self {
        Self {
            mode: Mode::Create,
            state: FormState {
                date: local_date_string(now),
                time: local_time_string(now),
                notes,
                fields,
            },
            is_loading: false,
            sink,
            notifier,
            on_submitted: None,
            on_complete: None,
        }
    }

    /// A form for editing `existing`; date and time are derived from its
    /// start instant, converted to the local calendar.
    pub fn edit(fields: F, existing: ExistingEvent, sink: S, notifier: N) -> Self {
        Self {
            mode: Mode::Edit {
                id: existing.id,
            },
            state: FormState {
                date: local_date_string(existing.time_start),
                time: local_time_string(existing.time_start),
                notes: existing.notes,
                fields,
            },
            is_loading: false,
            sink,
            notifier,
            on_submitted: None,
            on_complete: None,
        }
    }

    /// Attaches a hook invoked once per successful submission with the
    /// submitted state.
    #[must_use]
    pub fn on_submitted(mut self, hook: impl FnMut(&FormState<F>) + Send + 'static) -> Self {
        self.on_submitted = Some(Box::new(hook));
        self
    }

    /// Attaches a callback invoked on success, before the notice is emitted.
    /// Callers use it to clear their edit selection.
    #[must_use]
    pub fn on_complete(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// The current form state.
    pub fn state(&self) -> &FormState<F> {
        &self.state
    }

    /// Mutable access to the form state, for user edits.
    pub fn state_mut(&mut self) -> &mut FormState<F> {
        &mut self.state
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether this form edits an existing event.
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, Mode::Edit { .. })
    }

    /// Submits the current state.
    ///
    /// Parse failures and persistence failures are surfaced through the
    /// notifier and never propagated; the loading flag is cleared on every
    /// exit path. A submission already in flight is rejected outright.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_loading {
            tracing::warn!("submission already in flight, rejecting");
            return SubmitOutcome::Failed;
        }

        self.is_loading = true;
        let result = self.persist().await;
        self.is_loading = false;

        let verb = if self.is_edit() { "updated" } else { "created" };
        match result {
            Ok(()) => {
                if let Some(complete) = self.on_complete.as_mut() {
                    complete();
                }
                self.notifier
                    .notify(Notice::success(format!("Event {verb} successfully")));
                let state = &self.state;
                if let Some(hook) = self.on_submitted.as_mut() {
                    hook(state);
                }
                SubmitOutcome::Saved
            }
            Err(error) => {
                let action = if self.is_edit() { "updating" } else { "creating" };
                tracing::error!(%error, "error {action} event");
                let mut message = error.to_string();
                if message.is_empty() {
                    message = "An unknown error occurred".to_string();
                }
                self.notifier
                    .notify(Notice::error(format!("Error {action} event"), message));
                SubmitOutcome::Failed
            }
        }
    }

    async fn persist(&mut self) -> Result<(), FormError> {
        let instant = combine_local(&self.state.date, &self.state.time)?;

        let meta = PayloadMeta {
            id: match &self.mode {
                Mode::Edit { id } => id.clone(),
                Mode::Create => String::new(),
            },
            notes: self.state.notes.clone(),
            time_start: instant,
            // TODO: capture a real end time for duration-bearing events
            // (pump, breast feed) once the backend decides how sessions end.
            time_end: instant,
        };
        let payload = self.state.fields.clone().into_payload(meta);

        let result = match &self.mode {
            Mode::Edit { .. } => self.sink.update(payload).await,
            Mode::Create => self.sink.create(payload).await,
        };
        result.map_err(|e| FormError::Persistence(e.to_string()))?;
        Ok(())
    }
}
