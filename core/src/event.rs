// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback bottle-feed amount used when the backend has no prior event.
pub const DEFAULT_BOTTLE_AMOUNT_ML: i64 = 60;

/// The kind of a recorded infant-care event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A bottle feeding.
    #[serde(rename = "feed_bottle")]
    BottleFeed,

    /// A breastfeeding session.
    #[serde(rename = "feed_breast")]
    BreastFeed,

    /// A diaper change.
    #[serde(rename = "diaper_change")]
    DiaperChange,

    /// A pumping session.
    #[serde(rename = "pump")]
    Pump,
}

const KIND_BOTTLE_FEED: &str = "feed_bottle";
const KIND_BREAST_FEED: &str = "feed_breast";
const KIND_DIAPER_CHANGE: &str = "diaper_change";
const KIND_PUMP: &str = "pump";

impl AsRef<str> for EventKind {
    fn as_ref(&self) -> &str {
        match self {
            EventKind::BottleFeed => KIND_BOTTLE_FEED,
            EventKind::BreastFeed => KIND_BREAST_FEED,
            EventKind::DiaperChange => KIND_DIAPER_CHANGE,
            EventKind::Pump => KIND_PUMP,
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_BOTTLE_FEED => Ok(EventKind::BottleFeed),
            KIND_BREAST_FEED => Ok(EventKind::BreastFeed),
            KIND_DIAPER_CHANGE => Ok(EventKind::DiaperChange),
            KIND_PUMP => Ok(EventKind::Pump),
            _ => Err(()),
        }
    }
}

/// Which side a breastfeeding session used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum BreastSide {
    /// Left side only.
    Left,

    /// Right side only.
    Right,

    /// Both sides.
    #[default]
    Both,
}

impl AsRef<str> for BreastSide {
    fn as_ref(&self) -> &str {
        match self {
            BreastSide::Left => "left",
            BreastSide::Right => "right",
            BreastSide::Both => "both",
        }
    }
}

impl Display for BreastSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// What a diaper change found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DiaperType {
    /// Wet only.
    Pee,

    /// Soiled only.
    Poop,

    /// Both.
    Both,
}

/// Color of diaper contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DiaperColor {
    Yellow,
    Brown,
    Green,
    Black,
}

/// Consistency of diaper contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DiaperConsistency {
    Watery,
    Pasty,
}

/// Size of diaper contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DiaperSize {
    Small,
    Medium,
    Large,
}

/// The base event shape shared by every variant, as served by `/events/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier, empty until persisted.
    pub id: String,

    /// The event kind.
    pub name: EventKind,

    /// Human-readable description of the event.
    pub description: String,

    /// When the event started.
    pub time_start: DateTime<Utc>,

    /// When the event ended, if known.
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A bottle feeding, as sent to and served by `/events/feed/bottle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleFeedEvent {
    pub id: String,
    pub name: EventKind,
    pub description: String,
    pub time_start: DateTime<Utc>,
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,

    /// Amount fed in milliliters.
    pub amount_ml: i64,

    /// True if formula, false if breast milk.
    pub is_formula: bool,
}

/// A breastfeeding session, as sent to `/events/feed/breast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreastFeedEvent {
    pub id: String,
    pub name: EventKind,
    pub description: String,
    pub time_start: DateTime<Utc>,
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,

    /// Which side was used.
    pub side: BreastSide,
}

/// A diaper change, as sent to and served by `/events/diaper/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaperEvent {
    pub id: String,
    pub name: EventKind,
    pub description: String,
    pub time_start: DateTime<Utc>,
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,

    /// What the change found.
    pub diaper_type: DiaperType,
    #[serde(default)]
    pub diaper_contents_color: Option<DiaperColor>,
    #[serde(default)]
    pub diaper_contents_consistency: Option<DiaperConsistency>,
    #[serde(default)]
    pub diaper_contents_size: Option<DiaperSize>,
}

/// A pumping session, as sent to and served by `/events/pump/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpEvent {
    pub id: String,
    pub name: EventKind,
    pub description: String,
    pub time_start: DateTime<Utc>,
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,

    /// Amount pumped in milliliters. The backend rejects negative values.
    pub amount_ml: f64,
}

/// Metadata computed by the form controller at submission time.
#[derive(Debug, Clone)]
pub struct PayloadMeta {
    /// Existing event id when editing, empty when creating.
    pub id: String,

    /// Free-form notes from the form.
    pub notes: Option<String>,

    /// The combined date/time instant.
    pub time_start: DateTime<Utc>,

    /// The end instant sent alongside `time_start`.
    pub time_end: DateTime<Utc>,
}

/// Variant-specific form fields that know how to build their wire payload.
///
/// Each event variant declares its payload shape explicitly instead of
/// merging a generic field map at submission time.
pub trait EventFields {
    /// The wire payload this variant submits.
    type Payload;

    /// Builds the submission payload from the form fields and computed metadata.
    fn into_payload(self, meta: PayloadMeta) -> Self::Payload;
}

/// Form fields for a bottle feeding.
#[derive(Debug, Clone, PartialEq)]
pub struct BottleFeedFields {
    pub amount_ml: i64,
    pub is_formula: bool,
    pub description: String,
}

impl Default for BottleFeedFields {
    fn default() -> Self {
        Self {
            amount_ml: DEFAULT_BOTTLE_AMOUNT_ML,
            is_formula: false,
            description: String::new(),
        }
    }
}

impl From<&BottleFeedEvent> for BottleFeedFields {
    fn from(event: &BottleFeedEvent) -> Self {
        Self {
            amount_ml: event.amount_ml,
            is_formula: event.is_formula,
            description: event.description.clone(),
        }
    }
}

impl EventFields for BottleFeedFields {
    type Payload = BottleFeedEvent;

    fn into_payload(self, meta: PayloadMeta) -> BottleFeedEvent {
        BottleFeedEvent {
            id: meta.id,
            name: EventKind::BottleFeed,
            description: self.description,
            time_start: meta.time_start,
            time_end: Some(meta.time_end),
            notes: meta.notes,
            amount_ml: self.amount_ml,
            is_formula: self.is_formula,
        }
    }
}

/// Form fields for a breastfeeding session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreastFeedFields {
    pub side: BreastSide,
    pub description: String,
}

impl EventFields for BreastFeedFields {
    type Payload = BreastFeedEvent;

    fn into_payload(self, meta: PayloadMeta) -> BreastFeedEvent {
        BreastFeedEvent {
            id: meta.id,
            name: EventKind::BreastFeed,
            description: self.description,
            time_start: meta.time_start,
            time_end: Some(meta.time_end),
            notes: meta.notes,
            side: self.side,
        }
    }
}

/// Form fields for a diaper change.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaperFields {
    pub diaper_type: DiaperType,
    pub color: Option<DiaperColor>,
    pub consistency: Option<DiaperConsistency>,
    pub size: Option<DiaperSize>,
}

impl From<&DiaperEvent> for DiaperFields {
    fn from(event: &DiaperEvent) -> Self {
        Self {
            diaper_type: event.diaper_type,
            color: event.diaper_contents_color,
            consistency: event.diaper_contents_consistency,
            size: event.diaper_contents_size,
        }
    }
}

impl EventFields for DiaperFields {
    type Payload = DiaperEvent;

    fn into_payload(self, meta: PayloadMeta) -> DiaperEvent {
        DiaperEvent {
            id: meta.id,
            name: EventKind::DiaperChange,
            // Frozen by the backend schema.
            description: "Diaper change event".to_string(),
            time_start: meta.time_start,
            time_end: Some(meta.time_end),
            notes: meta.notes,
            diaper_type: self.diaper_type,
            diaper_contents_color: self.color,
            diaper_contents_consistency: self.consistency,
            diaper_contents_size: self.size,
        }
    }
}

/// Form fields for a pumping session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PumpFields {
    pub amount_ml: f64,
}

impl From<&PumpEvent> for PumpFields {
    fn from(event: &PumpEvent) -> Self {
        Self {
            amount_ml: event.amount_ml,
        }
    }
}

impl EventFields for PumpFields {
    type Payload = PumpEvent;

    fn into_payload(self, meta: PayloadMeta) -> PumpEvent {
        PumpEvent {
            id: meta.id,
            name: EventKind::Pump,
            // Frozen by the backend schema.
            description: "Pump event".to_string(),
            time_start: meta.time_start,
            time_end: Some(meta.time_end),
            notes: meta.notes,
            amount_ml: self.amount_ml,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn meta() -> PayloadMeta {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap();
        PayloadMeta {
            id: "abc".to_string(),
            notes: Some("fussy".to_string()),
            time_start: t,
            time_end: t,
        }
    }

    #[test]
    fn test_event_kind_round_trip() {
        for kind in [
            EventKind::BottleFeed,
            EventKind::BreastFeed,
            EventKind::DiaperChange,
            EventKind::Pump,
        ] {
            assert_eq!(kind.to_string().parse::<EventKind>(), Ok(kind));
        }
        assert_eq!("nope".parse::<EventKind>(), Err(()));
    }

    #[test]
    fn test_event_kind_serializes_as_wire_name() {
        let json = serde_json::to_string(&EventKind::BottleFeed).unwrap();
        assert_eq!(json, "\"feed_bottle\"");
        let json = serde_json::to_string(&EventKind::DiaperChange).unwrap();
        assert_eq!(json, "\"diaper_change\"");
    }

    #[test]
    fn test_bottle_feed_payload() {
        let fields = BottleFeedFields {
            amount_ml: 120,
            is_formula: true,
            description: "evening feed".to_string(),
        };
        let payload = fields.into_payload(meta());

        assert_eq!(payload.id, "abc");
        assert_eq!(payload.name, EventKind::BottleFeed);
        assert_eq!(payload.amount_ml, 120);
        assert!(payload.is_formula);
        assert_eq!(payload.notes.as_deref(), Some("fussy"));
        assert_eq!(payload.time_end, Some(payload.time_start));
    }

    #[test]
    fn test_diaper_payload_keeps_frozen_description() {
        let fields = DiaperFields {
            diaper_type: DiaperType::Both,
            color: Some(DiaperColor::Yellow),
            consistency: None,
            size: Some(DiaperSize::Medium),
        };
        let payload = fields.into_payload(meta());

        assert_eq!(payload.description, "Diaper change event");
        assert_eq!(payload.diaper_type, DiaperType::Both);
        assert_eq!(payload.diaper_contents_consistency, None);
    }

    #[test]
    fn test_diaper_enums_serialize_lowercase() {
        let json = serde_json::to_string(&DiaperColor::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let json = serde_json::to_string(&DiaperConsistency::Watery).unwrap();
        assert_eq!(json, "\"watery\"");
    }

    #[test]
    fn test_base_event_decodes_without_optionals() {
        let json = r#"{
            "id": "e1",
            "name": "pump",
            "description": "Pump event",
            "time_start": "2024-03-01T14:30:00Z"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, EventKind::Pump);
        assert_eq!(event.time_end, None);
        assert_eq!(event.notes, None);
    }

    #[test]
    fn test_default_bottle_fields() {
        let fields = BottleFeedFields::default();
        assert_eq!(fields.amount_ml, DEFAULT_BOTTLE_AMOUNT_ML);
        assert!(!fields.is_formula);
    }
}
