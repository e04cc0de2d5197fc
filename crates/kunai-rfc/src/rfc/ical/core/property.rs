//! Properties and the raw content lines they are built from (RFC 5545 §3.1, §3.8).

use super::Parameter;
use super::parameter::names as param_names;
use crate::rfc::ical::build::escape_text;

/// One unfolded `name *(";" param) ":" value` line straight out of the lexer.
/// `BEGIN` and `END` arrive in this form as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub name: String,
    pub params: Vec<Parameter>,
    /// Unfolded but still escaped.
    pub raw_value: String,
}

/// A property of a component.
///
/// `value` holds the wire text exactly as read, escapes included. Nothing is
/// typed at parse time: the validators and the date-time parser read values
/// when a repair rule asks, so a value they cannot understand still makes it
/// back out byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Always upper case.
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: String,
}

impl Property {
    /// `value` must already be in wire form. Use [`Property::text`] for
    /// free text.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_params(name, Vec::new(), value)
    }

    /// Escapes `text` as a TEXT value.
    #[must_use]
    pub fn text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, escape_text(text))
    }

    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            params,
            value: value.into(),
        }
    }

    /// First parameter called `name`, compared without regard to case.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).and_then(Parameter::value)
    }

    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// Drops every parameter called `name`; true if anything went.
    pub fn remove_param(&mut self, name: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|p| !p.name.eq_ignore_ascii_case(name));
        self.params.len() < before
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(param_names::TZID)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl From<ContentLine> for Property {
    fn from(line: ContentLine) -> Self {
        Self {
            name: line.name,
            params: line.params,
            value: line.raw_value,
        }
    }
}

/// Names of the properties the repair rules touch.
pub mod names {
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";
    pub const CALSCALE: &str = "CALSCALE";

    pub const UID: &str = "UID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const CREATED: &str = "CREATED";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";

    pub const SUMMARY: &str = "SUMMARY";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";

    // Enumerated
    pub const CLASS: &str = "CLASS";
    pub const STATUS: &str = "STATUS";
    pub const TRANSP: &str = "TRANSP";
    pub const ACTION: &str = "ACTION";

    pub const TRIGGER: &str = "TRIGGER";
}
