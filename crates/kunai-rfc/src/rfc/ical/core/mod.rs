//! iCalendar core models (RFC 5545).
//!
//! This module defines the core data structures for representing iCalendar
//! content. These types are designed for:
//! - Round-trip fidelity: preserving unknown properties and parameters
//! - Order preservation: properties and components keep document order
//! - Leniency: values stay untyped strings until something interprets them

mod component;
mod parameter;
mod property;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::{Parameter, names as param_names};
pub use property::{ContentLine, Property, names};
