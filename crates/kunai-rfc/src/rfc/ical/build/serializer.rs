//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to wire text. Components, properties and
//! parameters are written in document order so an upstream calendar comes
//! back out looking like itself apart from the repairs.

use super::escape::escape_param_value;
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ICalendar, Parameter, Property};

/// Serializes an iCalendar document to a string with CRLF line breaks.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    let mut result = String::new();
    write_component(&mut result, &ical.root);
    result
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(&fold_line(&format!("BEGIN:{}", component.name)));

    for prop in &component.properties {
        out.push_str(&serialize_property(prop));
    }

    for child in &component.children {
        write_component(out, child);
    }

    out.push_str(&fold_line(&format!("END:{}", component.name)));
}

/// Serializes a property to a folded content line ending in CRLF.
fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&prop.value);

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    let mut result = param.name.clone();
    result.push('=');

    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    result.push_str(&values.join(","));

    result
}
