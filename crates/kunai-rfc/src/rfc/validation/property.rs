//! ## Summary
//! Value-domain checks for enumerated iCalendar properties.
//!
//! RFC 5545 allows CLASS, STATUS, TRANSP and ACTION to hold one of a few
//! standard tokens, an `X-` extension token, or an IANA-registered token.
//! Only the first two are accepted here; an unregistered IANA token is
//! treated the same as garbage.

use crate::rfc::ical::core::names;

/// Extension prefix allowed for every enumerated property.
const EXTENSION_PREFIX: &str = "X-";

/// ## Summary
/// An iCalendar property whose value is drawn from a closed set of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumeratedProperty {
    /// Access classification (RFC 5545 §3.8.1.3).
    Class,
    /// Event status (RFC 5545 §3.8.1.11).
    Status,
    /// Time transparency (RFC 5545 §3.8.2.7).
    Transp,
    /// Alarm action (RFC 5545 §3.8.6.1).
    Action,
}

impl EnumeratedProperty {
    /// Property name as it appears on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => names::CLASS,
            Self::Status => names::STATUS,
            Self::Transp => names::TRANSP,
            Self::Action => names::ACTION,
        }
    }

    /// Standard values defined by RFC 5545.
    ///
    /// STATUS lists only the values legal on a VEVENT.
    #[must_use]
    pub const fn standard_values(self) -> &'static [&'static str] {
        match self {
            Self::Class => &["PUBLIC", "PRIVATE", "CONFIDENTIAL"],
            Self::Status => &["TENTATIVE", "CONFIRMED", "CANCELLED"],
            Self::Transp => &["OPAQUE", "TRANSPARENT"],
            Self::Action => &["AUDIO", "DISPLAY", "EMAIL"],
        }
    }

    /// Value written when the property is missing or invalid.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Class => "PUBLIC",
            Self::Status => "CONFIRMED",
            Self::Transp => "OPAQUE",
            Self::Action => "DISPLAY",
        }
    }

    /// ## Summary
    /// Returns whether `value` is a standard token or an `X-` extension.
    ///
    /// Matching is case-insensitive. The empty string is never valid.
    #[must_use]
    pub fn is_valid(self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        is_extension(value)
            || self
                .standard_values()
                .iter()
                .any(|v| v.eq_ignore_ascii_case(value))
    }
}

fn is_extension(value: &str) -> bool {
    value
        .get(..EXTENSION_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX))
}

/// Returns whether `value` is a legal CLASS value.
#[must_use]
pub fn is_valid_class(value: &str) -> bool {
    EnumeratedProperty::Class.is_valid(value)
}

/// Returns whether `value` is a legal VEVENT STATUS value.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    EnumeratedProperty::Status.is_valid(value)
}

/// Returns whether `value` is a legal TRANSP value.
#[must_use]
pub fn is_valid_transp(value: &str) -> bool {
    EnumeratedProperty::Transp.is_valid(value)
}

/// Returns whether `value` is a legal VALARM ACTION value.
#[must_use]
pub fn is_valid_action(value: &str) -> bool {
    EnumeratedProperty::Action.is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_values() {
        assert!(is_valid_class("PUBLIC"));
        assert!(is_valid_class("private"));
        assert!(is_valid_class("Confidential"));
        assert!(is_valid_class("X-INTERNAL"));
        assert!(!is_valid_class("SECRET"));
        assert!(!is_valid_class(""));
    }

    #[test]
    fn status_values() {
        assert!(is_valid_status("TENTATIVE"));
        assert!(is_valid_status("confirmed"));
        assert!(is_valid_status("CANCELLED"));
        assert!(is_valid_status("x-postponed"));
        // VTODO-only status
        assert!(!is_valid_status("NEEDS-ACTION"));
        assert!(!is_valid_status(""));
    }

    #[test]
    fn transp_values() {
        assert!(is_valid_transp("OPAQUE"));
        assert!(is_valid_transp("transparent"));
        assert!(is_valid_transp("X-FREE"));
        assert!(!is_valid_transp("BUSY"));
        assert!(!is_valid_transp(""));
    }

    #[test]
    fn action_values() {
        assert!(is_valid_action("AUDIO"));
        assert!(is_valid_action("Display"));
        assert!(is_valid_action("EMAIL"));
        assert!(is_valid_action("X-SMS"));
        // Deprecated in RFC 5545
        assert!(!is_valid_action("PROCEDURE"));
        assert!(!is_valid_action(""));
    }

    #[test]
    fn extension_prefix_is_case_insensitive() {
        assert!(is_valid_class("x-foo"));
        assert!(is_valid_class("X-"));
        assert!(!is_valid_class("X"));
        assert!(!is_valid_class("XFOO"));
    }

    #[test]
    fn non_ascii_value_is_rejected() {
        assert!(!is_valid_class("é"));
        assert!(!is_valid_class("ÖFFENTLICH"));
    }

    #[test]
    fn defaults_are_valid() {
        for prop in [
            EnumeratedProperty::Class,
            EnumeratedProperty::Status,
            EnumeratedProperty::Transp,
            EnumeratedProperty::Action,
        ] {
            assert!(prop.is_valid(prop.default_value()), "{}", prop.name());
        }
    }
}
