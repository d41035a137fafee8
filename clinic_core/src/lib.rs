#![forbid(unsafe_code)]

//! Core domain model and booking logic for the clinic reservation system.
//!
//! This crate provides:
//! - Domain types (treatments, categories, bookable dates, time slots)
//! - Catalog management and tab filtering
//! - Bookable date generation with an injectable clock
//! - The reservation session state machine
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod availability;
pub mod session;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_treatment, filter_catalog, get_default_catalog, ALL_TAB};
pub use availability::{
    bookable_dates_from, generate_bookable_dates, Clock, FixedClock, SystemClock, DEFAULT_HORIZON,
};
pub use session::{DraftField, ReservationDraft, ReservationSession, SessionState};
pub use config::Config;
