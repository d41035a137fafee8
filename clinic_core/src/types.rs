//! Core domain types for the clinic booking system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Treatments and the categories they are grouped in
//! - Bookable dates and the fixed time slot grid
//! - The immutable confirmation summary handed out after booking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Catalog Types
// ============================================================================

/// A bookable treatment as shown on the menu
///
/// Prices are display strings (e.g. `"$150+"`) and are never parsed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Treatment {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl Treatment {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// A menu section grouping related treatments (e.g. "Botulinum Therapy")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Treatment>,
}

/// The complete ordered treatment menu
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

// ============================================================================
// Scheduling Types
// ============================================================================

/// A weekday on which an appointment may be requested
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookableDate {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub weekday_label: String,
    pub day_of_month: u32,
    /// Month name and day, e.g. "October 19"
    pub full_label: String,
}

/// One of the fixed on-the-hour appointment times
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST_HOUR: u8 = 10;
    pub const LAST_HOUR: u8 = 16;

    /// Every slot of the day, in clock order
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot(10),
        TimeSlot(11),
        TimeSlot(12),
        TimeSlot(13),
        TimeSlot(14),
        TimeSlot(15),
        TimeSlot(16),
    ];

    /// Slot starting at `hour`, if that hour is on the grid
    pub fn from_hour(hour: u8) -> Option<Self> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR)
            .contains(&hour)
            .then_some(TimeSlot(hour))
    }

    pub fn hour(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let invalid = || crate::Error::InvalidTimeSlot(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        if minute != "00" {
            return Err(invalid());
        }

        TimeSlot::from_hour(hour).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = crate::Error;

    fn try_from(value: String) -> crate::Result<Self> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

// ============================================================================
// Confirmation Types
// ============================================================================

/// Snapshot of a draft taken at the moment it was confirmed
///
/// Fields are private so the snapshot cannot be edited after the fact;
/// this is the record a notification service would receive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmationSummary {
    reference: Uuid,
    treatment_name: String,
    treatment_price: String,
    date_label: String,
    time: TimeSlot,
    client_name: String,
    client_phone: String,
}

impl ConfirmationSummary {
    pub(crate) fn new(
        treatment: &Treatment,
        date: &BookableDate,
        time: TimeSlot,
        client_name: &str,
        client_phone: &str,
    ) -> Self {
        Self {
            reference: Uuid::new_v4(),
            treatment_name: treatment.name.clone(),
            treatment_price: treatment.price.clone(),
            date_label: date.full_label.clone(),
            time,
            client_name: client_name.to_string(),
            client_phone: client_phone.to_string(),
        }
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn treatment_name(&self) -> &str {
        &self.treatment_name
    }

    pub fn treatment_price(&self) -> &str {
        &self.treatment_price
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn time(&self) -> TimeSlot {
        self.time
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_phone(&self) -> &str {
        &self.client_phone
    }

    /// Human-readable acknowledgement shown to the client
    pub fn text(&self) -> String {
        format!(
            "Thank you, {}. We have reserved your spot for {} on {} at {}. \
             We will contact you at {} to confirm.",
            self.client_name, self.treatment_name, self.date_label, self.time, self.client_phone
        )
    }
}
