//! Booking date restrictions and consultation type selection.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format accepted by the booking form (HTML date input value).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Advisory shown when a weekend session date is picked.
const WEEKEND_ADVISORY_TEXT: &str = "Note: Weekend sessions may have limited availability.";

/// The bookable date range: tomorrow through 60 days out, inclusive at both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// Earliest bookable date
    pub min: NaiveDate,
    /// Latest bookable date
    pub max: NaiveDate,
}

impl BookingWindow {
    /// Build the window relative to an explicitly supplied current date.
    ///
    /// The caller owns the clock; passing the date in keeps the window
    /// deterministic and testable.
    pub fn starting(today: NaiveDate) -> Self {
        let min = today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
        let max = today
            .checked_add_days(Days::new(60))
            .unwrap_or(NaiveDate::MAX);
        Self { min, max }
    }

    /// Check if a date is bookable.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    /// The `min` attribute value for an HTML date input.
    pub fn min_attr(&self) -> String {
        self.min.format(DATE_FORMAT).to_string()
    }

    /// The `max` attribute value for an HTML date input.
    pub fn max_attr(&self) -> String {
        self.max.format(DATE_FORMAT).to_string()
    }
}

/// Parse a booking form date value (`YYYY-MM-DD`).
pub fn parse_booking_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// A dismissible advisory attached to the date field.
///
/// The host shows at most one advisory at a time: any advisory already
/// displayed is removed before this one is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    /// Advisory message text
    pub text: &'static str,
    /// CSS class of the advisory container
    pub css_class: &'static str,
}

/// Weekend advisory for a selected session date: `Some` for Saturday or
/// Sunday, `None` on weekdays.
pub fn weekend_advisory(date: NaiveDate) -> Option<Advisory> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Some(Advisory {
            text: WEEKEND_ADVISORY_TEXT,
            css_class: "alert alert-warning",
        }),
        _ => None,
    }
}

/// Consultation session type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    /// Video call session
    #[default]
    Video,
    /// In-person session
    InPerson,
}

impl ConsultationType {
    /// All selectable types, in display order.
    pub const ALL: [ConsultationType; 2] = [ConsultationType::Video, ConsultationType::InPerson];

    /// The value submitted in the booking form.
    pub fn as_form_value(self) -> &'static str {
        match self {
            ConsultationType::Video => "video",
            ConsultationType::InPerson => "in-person",
        }
    }

    /// Element id of the selectable card for this type.
    pub fn option_element_id(self) -> String {
        format!("{}-option", self.as_form_value())
    }

    /// Element id of the mirrored radio input for this type.
    pub fn radio_element_id(self) -> String {
        format!("{}-radio", self.as_form_value())
    }
}

impl FromStr for ConsultationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "video" => Ok(ConsultationType::Video),
            "in-person" => Ok(ConsultationType::InPerson),
            other => Err(Error::UnknownConsultationType(other.to_string())),
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// Single-selection state over the consultation types.
///
/// Selecting a type deselects the previous one; the selection is mirrored
/// into the radio input and the hidden form field by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsultationSelection {
    selected: Option<ConsultationType>,
}

impl ConsultationSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a type, replacing any previous selection.
    pub fn select(&mut self, kind: ConsultationType) {
        self.selected = Some(kind);
    }

    /// The currently selected type.
    pub fn selected(&self) -> Option<ConsultationType> {
        self.selected
    }

    /// The hidden form field value for the current selection.
    pub fn form_value(&self) -> Option<&'static str> {
        self.selected.map(ConsultationType::as_form_value)
    }
}
