//! Reservation session state machine.
//!
//! A session walks a visitor through treatment → date → time → contact
//! details, then freezes the result into a [`ConfirmationSummary`].
//!
//! The machine is total: every action yields a valid next state. Actions
//! that are not allowed right now (a time before a date, confirming an
//! incomplete draft, editing a confirmed booking) are ignored and reported
//! back as `false` so the caller can render them as disabled.

use crate::{catalog, BookableDate, ConfirmationSummary, TimeSlot, Treatment};
use std::fmt;

/// Lifecycle state of a reservation session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Fields are editable
    Drafting,
    /// Booking is frozen until `reset`
    Confirmed,
}

/// A required piece of the draft, in selection order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Treatment,
    Date,
    Time,
    ClientName,
    ClientPhone,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Treatment => "treatment",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::ClientName => "name",
            DraftField::ClientPhone => "phone",
        };
        f.write_str(label)
    }
}

/// The in-progress booking selection
///
/// Only [`ReservationSession`] can change a draft, which keeps the
/// time-requires-date rule in one place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    treatment: Option<Treatment>,
    date: Option<BookableDate>,
    time: Option<TimeSlot>,
    client_name: String,
    client_phone: String,
}

impl ReservationDraft {
    /// Empty draft, optionally seeded with a treatment
    pub fn new(treatment: Option<Treatment>) -> Self {
        Self {
            treatment,
            ..Self::default()
        }
    }

    pub fn treatment(&self) -> Option<&Treatment> {
        self.treatment.as_ref()
    }

    pub fn date(&self) -> Option<&BookableDate> {
        self.date.as_ref()
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_phone(&self) -> &str {
        &self.client_phone
    }

    /// Time slots that can be picked right now
    ///
    /// Empty until a date has been chosen.
    pub fn available_time_slots(&self) -> &'static [TimeSlot] {
        if self.date.is_some() {
            &TimeSlot::ALL
        } else {
            &[]
        }
    }

    /// Required fields still absent or empty, in selection order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.treatment.is_none() {
            missing.push(DraftField::Treatment);
        }
        if self.date.is_none() {
            missing.push(DraftField::Date);
        }
        if self.time.is_none() {
            missing.push(DraftField::Time);
        }
        if self.client_name.is_empty() {
            missing.push(DraftField::ClientName);
        }
        if self.client_phone.is_empty() {
            missing.push(DraftField::ClientPhone);
        }
        missing
    }

    /// Whether every required field is filled in
    pub fn can_confirm(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn snapshot(&self) -> Option<ConfirmationSummary> {
        match (&self.treatment, &self.date, self.time) {
            (Some(treatment), Some(date), Some(time))
                if !self.client_name.is_empty() && !self.client_phone.is_empty() =>
            {
                Some(ConfirmationSummary::new(
                    treatment,
                    date,
                    time,
                    &self.client_name,
                    &self.client_phone,
                ))
            }
            _ => None,
        }
    }
}

/// One visitor's booking attempt
///
/// Owned by whoever drives the UI and passed by reference to the views
/// that need it. Nothing here is shared between sessions.
#[derive(Clone, Debug)]
pub struct ReservationSession {
    default_treatment: Option<Treatment>,
    draft: ReservationDraft,
    summary: Option<ConfirmationSummary>,
}

impl Default for ReservationSession {
    fn default() -> Self {
        Self::with_default_treatment()
    }
}

impl ReservationSession {
    /// Start a session whose draft (and every draft after `reset`) is
    /// seeded with `default_treatment`
    pub fn new(default_treatment: Option<Treatment>) -> Self {
        Self {
            draft: ReservationDraft::new(default_treatment.clone()),
            default_treatment,
            summary: None,
        }
    }

    /// Start a session seeded with the general consultation
    pub fn with_default_treatment() -> Self {
        Self::new(Some(catalog::default_treatment()))
    }

    pub fn state(&self) -> SessionState {
        if self.summary.is_some() {
            SessionState::Confirmed
        } else {
            SessionState::Drafting
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.state() == SessionState::Confirmed
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn default_treatment(&self) -> Option<&Treatment> {
        self.default_treatment.as_ref()
    }

    fn editable(&self, action: &str) -> bool {
        if self.is_confirmed() {
            tracing::debug!("Ignoring {} on a confirmed booking", action);
            return false;
        }
        true
    }

    /// Choose a treatment; date and time are left as they are
    pub fn select_treatment(&mut self, treatment: Treatment) -> bool {
        if !self.editable("select_treatment") {
            return false;
        }
        tracing::debug!("Selected treatment {:?}", treatment.name);
        self.draft.treatment = Some(treatment);
        true
    }

    pub fn clear_treatment(&mut self) -> bool {
        if !self.editable("clear_treatment") {
            return false;
        }
        self.draft.treatment = None;
        true
    }

    /// Choose a date; a previously chosen time is kept
    pub fn select_date(&mut self, date: BookableDate) -> bool {
        if !self.editable("select_date") {
            return false;
        }
        tracing::debug!("Selected date {}", date.full_label);
        self.draft.date = Some(date);
        true
    }

    /// Choose a time slot; ignored until a date has been chosen
    pub fn select_time(&mut self, time: TimeSlot) -> bool {
        if !self.editable("select_time") {
            return false;
        }
        if self.draft.date.is_none() {
            tracing::debug!("Ignoring time {} before a date is selected", time);
            return false;
        }
        tracing::debug!("Selected time {}", time);
        self.draft.time = Some(time);
        true
    }

    /// Store the client's name exactly as typed
    pub fn set_client_name(&mut self, name: impl Into<String>) -> bool {
        if !self.editable("set_client_name") {
            return false;
        }
        self.draft.client_name = name.into();
        true
    }

    /// Store the client's phone exactly as typed; no format is enforced
    pub fn set_client_phone(&mut self, phone: impl Into<String>) -> bool {
        if !self.editable("set_client_phone") {
            return false;
        }
        self.draft.client_phone = phone.into();
        true
    }

    pub fn available_time_slots(&self) -> &'static [TimeSlot] {
        self.draft.available_time_slots()
    }

    /// Whether `confirm` would succeed right now
    pub fn can_confirm(&self) -> bool {
        !self.is_confirmed() && self.draft.can_confirm()
    }

    /// Freeze the draft into a confirmation summary
    ///
    /// Returns `false` and leaves everything untouched when the draft is
    /// incomplete or the booking is already confirmed.
    pub fn confirm(&mut self) -> bool {
        if !self.editable("confirm") {
            return false;
        }

        match self.draft.snapshot() {
            Some(summary) => {
                tracing::info!(
                    "Booking {} confirmed: {} on {} at {}",
                    summary.reference(),
                    summary.treatment_name(),
                    summary.date_label(),
                    summary.time()
                );
                self.summary = Some(summary);
                true
            }
            None => {
                tracing::debug!(
                    "Ignoring confirm, missing: {:?}",
                    self.draft.missing_fields()
                );
                false
            }
        }
    }

    /// Start over with a fresh draft after a confirmed booking
    ///
    /// Ignored while still drafting.
    pub fn reset(&mut self) -> bool {
        if !self.is_confirmed() {
            tracing::debug!("Ignoring reset while drafting");
            return false;
        }
        self.draft = ReservationDraft::new(self.default_treatment.clone());
        self.summary = None;
        tracing::info!("Started a new booking");
        true
    }

    /// The frozen booking, present only once confirmed
    pub fn summary(&self) -> Option<&ConfirmationSummary> {
        self.summary.as_ref()
    }

    pub fn summary_text(&self) -> Option<String> {
        self.summary.as_ref().map(ConfirmationSummary::text)
    }
}
