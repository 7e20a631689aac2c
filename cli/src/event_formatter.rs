// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use openbaby_api::BottleFeedStatistic;
use openbaby_core::{
    BottleFeedEvent, DiaperEvent, Event, PumpEvent, local_date_string, local_time_string,
};
use serde::Serialize;

use crate::util::OutputFormat;

/// Renders event lists as a padded table or JSON.
#[derive(Debug, Clone, Copy)]
pub struct EventFormatter {
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<E: ListRow + Serialize>(&self, events: &[E]) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(events).unwrap_or_default(),
            OutputFormat::Table => render_table(E::HEADERS, events),
        }
    }
}

/// One table row per listed item.
pub trait ListRow {
    /// Column headers, in render order.
    const HEADERS: &'static [&'static str];

    /// Cell values, matching [`Self::HEADERS`].
    fn columns(&self) -> Vec<String>;
}

fn render_table<E: ListRow>(headers: &[&str], events: &[E]) -> String {
    let rows: Vec<Vec<String>> = events.iter().map(ListRow::columns).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers.iter().map(ToString::to_string), &widths);
    for row in rows {
        render_row(&mut out, row.into_iter(), &widths);
    }
    out.pop(); // trailing newline
    out
}

fn render_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn time_cell(event_start: chrono::DateTime<chrono::Utc>) -> String {
    format!(
        "{} {}",
        local_date_string(event_start),
        local_time_string(event_start)
    )
}

impl ListRow for BottleFeedEvent {
    const HEADERS: &'static [&'static str] = &["ID", "TIME", "AMOUNT", "MILK", "NOTES"];

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            time_cell(self.time_start),
            format!("{} ml", self.amount_ml),
            if self.is_formula { "formula" } else { "breast milk" }.to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

impl ListRow for DiaperEvent {
    const HEADERS: &'static [&'static str] = &["ID", "TIME", "TYPE", "CONTENTS", "NOTES"];

    fn columns(&self) -> Vec<String> {
        let contents = [
            self.diaper_contents_color.map(|c| format!("{c:?}").to_lowercase()),
            self.diaper_contents_consistency
                .map(|c| format!("{c:?}").to_lowercase()),
            self.diaper_contents_size.map(|c| format!("{c:?}").to_lowercase()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

        vec![
            self.id.clone(),
            time_cell(self.time_start),
            format!("{:?}", self.diaper_type).to_lowercase(),
            contents,
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

impl ListRow for PumpEvent {
    const HEADERS: &'static [&'static str] = &["ID", "TIME", "AMOUNT", "NOTES"];

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            time_cell(self.time_start),
            format!("{} ml", self.amount_ml),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

impl ListRow for Event {
    const HEADERS: &'static [&'static str] = &["ID", "TIME", "KIND", "DESCRIPTION"];

    fn columns(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            time_cell(self.time_start),
            self.name.to_string(),
            self.description.clone(),
        ]
    }
}

impl ListRow for BottleFeedStatistic {
    const HEADERS: &'static [&'static str] = &["TIME", "AMOUNT", "SINCE LAST FEED"];

    fn columns(&self) -> Vec<String> {
        vec![
            time_cell(self.time),
            format!("{} ml", self.amount_ml),
            format!("{:.0} min", self.time_since_last_feed_minutes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use openbaby_core::{DiaperColor, DiaperConsistency, DiaperType, EventKind};

    use super::*;

    fn pump(id: &str, amount: f64) -> PumpEvent {
        PumpEvent {
            id: id.to_string(),
            name: EventKind::Pump,
            description: "Pump event".to_string(),
            time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
            time_end: None,
            notes: None,
            amount_ml: amount,
        }
    }

    #[test]
    fn test_table_pads_columns() {
        let formatter = EventFormatter::new(OutputFormat::Table);
        let out = formatter.format(&[pump("a", 90.0), pump("longer-id", 7.5)]);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("90 ml"));
        assert!(lines[2].starts_with("longer-id"));
        // Cells line up under their headers.
        let time_col = lines[0].find("TIME").unwrap();
        assert_eq!(&lines[1][time_col..time_col + 4], "2024");
    }

    #[test]
    fn test_json_output_is_the_events_themselves() {
        let formatter = EventFormatter::new(OutputFormat::Json);
        let out = formatter.format(&[pump("a", 90.0)]);
        let parsed: Vec<PumpEvent> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].amount_ml, 90.0);
    }

    #[test]
    fn test_diaper_contents_cell() {
        let event = DiaperEvent {
            id: "d1".to_string(),
            name: EventKind::DiaperChange,
            description: "Diaper change event".to_string(),
            time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
            time_end: None,
            notes: None,
            diaper_type: DiaperType::Poop,
            diaper_contents_color: Some(DiaperColor::Yellow),
            diaper_contents_consistency: Some(DiaperConsistency::Pasty),
            diaper_contents_size: None,
        };
        let columns = event.columns();
        assert_eq!(columns[2], "poop");
        assert_eq!(columns[3], "yellow, pasty");
    }
}
