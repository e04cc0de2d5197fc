//! VALARM repairs.
//!
//! RFC 5545 §3.6.6: ACTION and TRIGGER are always required, DESCRIPTION is
//! required for DISPLAY and EMAIL, SUMMARY additionally for EMAIL.

use kunai_rfc::rfc::ical::core::{Component, names};
use kunai_rfc::rfc::validation::EnumeratedProperty;

use super::{ScopedLog, ensure_value, set_value};

const DEFAULT_TRIGGER: &str = "-PT15M";
const DEFAULT_REMINDER: &str = "Event Reminder";

pub(super) fn fix_alarms(event: &mut Component, log: &mut ScopedLog<'_>) {
    // Alarm text falls back to the event's own summary.
    let reminder = event
        .value_of(names::SUMMARY)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_REMINDER)
        .to_string();

    for (i, alarm) in event.alarms_mut().enumerate() {
        fix_alarm(alarm, i + 1, &reminder, log);
    }
}

fn fix_alarm(alarm: &mut Component, n: usize, reminder: &str, log: &mut ScopedLog<'_>) {
    let action = EnumeratedProperty::Action;
    let default = action.default_value();

    let message = match alarm.value_of(names::ACTION) {
        None => Some(format!("Added missing ACTION to alarm {n}")),
        Some(value) if value.trim().is_empty() => {
            Some(format!("Set empty ACTION to {default} in alarm {n}"))
        }
        Some(value) if !action.is_valid(value) => Some(format!(
            "Invalid ACTION value '{value}' in alarm {n}, changed to {default}"
        )),
        Some(_) => None,
    };
    if let Some(message) = message {
        set_value(alarm, names::ACTION, default.to_string());
        log.record(message);
    }

    if ensure_value(alarm, names::TRIGGER, || DEFAULT_TRIGGER.to_string()) {
        log.record(format!("Added missing TRIGGER to alarm {n}"));
    }

    let action_value = alarm
        .value_of(names::ACTION)
        .map(str::to_ascii_uppercase)
        .unwrap_or_default();

    if matches!(action_value.as_str(), "DISPLAY" | "EMAIL")
        && ensure_value(alarm, names::DESCRIPTION, || reminder.to_string())
    {
        log.record(format!("Added missing DESCRIPTION to {action_value} alarm {n}"));
    }

    if action_value == "EMAIL" && ensure_value(alarm, names::SUMMARY, || reminder.to_string()) {
        log.record(format!("Added missing SUMMARY to EMAIL alarm {n}"));
    }
}
