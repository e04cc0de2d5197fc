//! iCalendar RFC 5545 implementation.
//!
//! This module provides lenient iCalendar parsing and serialization:
//!
//! - `core`: Type definitions for iCalendar structures
//! - `parse`: Parsers for iCalendar content
//! - `build`: Serializers for iCalendar content
//! - `datetime`: Normalization and parsing of compact date-time values
//!
//! Property values are kept as raw wire strings. Nothing is interpreted
//! while parsing, so a document with a malformed value still loads and can
//! be repaired afterwards.
//!
//! ## Example
//!
//! ```rust
//! use kunai_rfc::rfc::ical::{build, core::*, parse};
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
//! let mut ical = parse::parse(input).unwrap();
//!
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Team Meeting"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! assert!(output.contains("SUMMARY:Team Meeting\r\n"));
//! ```

pub mod build;
pub mod core;
pub mod datetime;
pub mod parse;


// Re-export commonly used items at module level
pub use build::serialize;
pub use core::{Component, ComponentKind, ICalendar, Parameter, Property};
pub use parse::{ParseError, ParseResult, parse};
