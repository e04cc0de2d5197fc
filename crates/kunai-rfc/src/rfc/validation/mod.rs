//! Validation logic for RFC compliance.
//!
//! This module provides validators for enumerated iCalendar property values
//! so the repair engine can tell a usable value from one that needs a default.

pub mod property;

pub use property::{
    EnumeratedProperty, is_valid_action, is_valid_class, is_valid_status, is_valid_transp,
};
