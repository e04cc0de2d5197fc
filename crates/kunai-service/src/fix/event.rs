//! VEVENT repairs.

use chrono::TimeDelta;
use kunai_rfc::rfc::ical::core::{Component, names, param_names};
use kunai_rfc::rfc::ical::datetime;
use kunai_rfc::rfc::validation::EnumeratedProperty;

use super::uid::generate_uid;
use super::{FixContext, ScopedLog, alarm, ensure_value, set_value};

const DEFAULT_SUMMARY: &str = "Event";

pub(super) fn fix_event(event: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    fix_required_properties(event, ctx, log);
    fix_date_times(event, ctx, log);
    fix_optional_properties(event, ctx, log);
    alarm::fix_alarms(event, log);
}

fn fix_required_properties(event: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    if ensure_value(event, names::UID, || generate_uid(&ctx.options.uid_domain)) {
        log.record("Generated missing UID");
    }

    if ensure_value(event, names::DTSTAMP, || ctx.stamp()) {
        log.record("Added missing DTSTAMP");
    }

    if ensure_value(event, names::SUMMARY, || DEFAULT_SUMMARY.to_string()) {
        log.record("Added default SUMMARY");
    }
}

fn fix_date_times(event: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    let one_hour = TimeDelta::hours(1);

    if ensure_value(event, names::DTSTART, || ctx.stamp()) {
        log.record("Added missing DTSTART");
    }

    if normalize_in_place(event, names::DTSTART) {
        log.record("Normalized DTSTART format");
    }

    let start = parsed_value(event, names::DTSTART);

    if ensure_value(event, names::DTEND, || {
        datetime::format_utc(start.unwrap_or(ctx.now) + one_hour)
    }) {
        log.record("Added missing DTEND");
    }

    if normalize_in_place(event, names::DTEND) {
        log.record("Normalized DTEND format");
    }

    // Unparseable values are left as normalized.
    if let (Some(start), Some(end)) = (start, parsed_value(event, names::DTEND))
        && end <= start
    {
        set_value(event, names::DTEND, datetime::format_utc(start + one_hour));
        log.record("Fixed DTEND to be after DTSTART");
    }
}

fn fix_optional_properties(event: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    if ensure_value(event, names::CREATED, || ctx.stamp()) {
        log.record("Added missing CREATED timestamp");
    }

    if ensure_value(event, names::LAST_MODIFIED, || ctx.stamp()) {
        log.record("Added missing LAST-MODIFIED timestamp");
    }

    for property in [
        EnumeratedProperty::Class,
        EnumeratedProperty::Status,
        EnumeratedProperty::Transp,
    ] {
        fix_enumerated(event, property, log);
    }
}

/// Replaces a missing, empty or unrecognized enumerated value with its
/// default.
fn fix_enumerated(event: &mut Component, property: EnumeratedProperty, log: &mut ScopedLog<'_>) {
    let name = property.name();
    let default = property.default_value();

    let message = match event.value_of(name) {
        None => format!("Added missing {name} ({default})"),
        Some(value) if value.trim().is_empty() => format!("Set empty {name} to {default}"),
        Some(value) if !property.is_valid(value) => {
            format!("Invalid {name} value '{value}', changed to {default}")
        }
        Some(_) => return,
    };

    set_value(event, name, default.to_string());
    log.record(message);
}

/// Normalizes a date-time property value. Returns whether it changed.
///
/// A date-only value that becomes a date-time loses its `VALUE=DATE`
/// parameter.
fn normalize_in_place(component: &mut Component, name: &str) -> bool {
    let Some(prop) = component.get_property_mut(name) else {
        return false;
    };

    let normalized = datetime::normalize(&prop.value);
    if normalized == prop.value {
        return false;
    }

    let was_date = prop
        .get_param(param_names::VALUE)
        .is_some_and(|p| p.has_value("DATE"));
    if was_date && normalized.contains('T') {
        prop.remove_param(param_names::VALUE);
    }

    tracing::trace!(property = name, from = %prop.value, to = %normalized, "Normalized date-time");
    prop.value = normalized;
    true
}

fn parsed_value(component: &Component, name: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    component
        .value_of(name)
        .and_then(|v| datetime::parse(v).ok())
}
