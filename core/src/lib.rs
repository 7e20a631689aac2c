// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

mod datetime;
mod event;
mod form;
mod store;
mod units;

pub use crate::datetime::{
    DATE_FORMAT, DateTimeError, TIME_FORMAT, combine_local, local_date_string, local_time_string,
};
pub use crate::event::{
    BottleFeedEvent, BottleFeedFields, BreastFeedEvent, BreastFeedFields, BreastSide,
    DEFAULT_BOTTLE_AMOUNT_ML, DiaperColor, DiaperConsistency, DiaperEvent, DiaperFields,
    DiaperSize, DiaperType, Event, EventFields, EventKind, PayloadMeta, PumpEvent, PumpFields,
};
pub use crate::form::{
    EventForm, EventSink, ExistingEvent, FormError, FormState, Notice, Notifier, Severity,
    SinkError, SubmitOutcome,
};
pub use crate::store::EditSelection;
pub use crate::units::{ML_PER_OZ, ml_to_oz, oz_to_ml};

/// The name of the Open Baby application.
pub const APP_NAME: &str = "openbaby";
