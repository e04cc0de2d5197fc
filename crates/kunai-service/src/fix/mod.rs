//! ## Summary
//! RFC 5545 compliance repair.
//!
//! [`fix_calendar`] walks a parsed calendar and fills in or corrects the
//! properties that clients choke on: calendar identity, required event and
//! to-do properties, DTSTART/DTEND consistency, enumerated values and alarm
//! requirements. Every correction is recorded in the returned [`FixLog`].
//!
//! Steps run in a fixed order because later steps read earlier results
//! (DTEND repair reads the already normalized DTSTART).

mod alarm;
mod calendar;
mod event;
pub mod log;
mod todo;
pub mod uid;

use chrono::{DateTime, Utc};
use kunai_core::config::CalendarConfig;
use kunai_core::constants::{DEFAULT_PRODID, DEFAULT_UID_DOMAIN};
use kunai_rfc::rfc::ical::core::{Component, ICalendar, Property};
use kunai_rfc::rfc::ical::datetime;

pub use log::{FixEntry, FixLog, FixScope};

/// Identifiers the engine writes into repaired calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOptions {
    /// PRODID for calendars that have none.
    pub prodid: String,
    /// Domain suffix for generated UIDs.
    pub uid_domain: String,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
        }
    }
}

impl From<&CalendarConfig> for FixOptions {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            prodid: config.prodid.clone(),
            uid_domain: config.domain.clone(),
        }
    }
}

/// ## Summary
/// Repairs a calendar in place using the current time for generated
/// timestamps.
#[must_use]
pub fn fix_calendar(ical: &mut ICalendar, options: &FixOptions) -> FixLog {
    fix_calendar_at(ical, options, Utc::now())
}

/// ## Summary
/// Repairs a calendar in place, writing `now` wherever a timestamp has to
/// be invented.
///
/// Calendar properties are fixed first, then every VEVENT (required
/// properties, date-times, optional properties, alarms) and finally every
/// VTODO. Other components are left alone.
#[must_use]
pub fn fix_calendar_at(ical: &mut ICalendar, options: &FixOptions, now: DateTime<Utc>) -> FixLog {
    let ctx = FixContext { options, now };
    let mut log = FixLog::new();

    tracing::debug!(
        events = ical.root.events().len(),
        todos = ical.root.todos().len(),
        "Fixing calendar"
    );

    calendar::fix_calendar_properties(&mut ical.root, &ctx, &mut ScopedLog::new(&mut log, FixScope::Calendar));

    for (i, event) in ical.events_mut().enumerate() {
        event::fix_event(event, &ctx, &mut ScopedLog::new(&mut log, FixScope::Event(i + 1)));
    }

    for (i, todo) in ical.todos_mut().enumerate() {
        todo::fix_todo(todo, &ctx, &mut ScopedLog::new(&mut log, FixScope::Todo(i + 1)));
    }

    tracing::debug!(fixes = log.len(), "Calendar fixed");

    log
}

/// Inputs shared by every fix step of one call.
struct FixContext<'a> {
    options: &'a FixOptions,
    now: DateTime<Utc>,
}

impl FixContext<'_> {
    /// `now` in canonical UTC form.
    fn stamp(&self) -> String {
        datetime::format_utc(self.now)
    }
}

/// Records fixes for one scope.
struct ScopedLog<'a> {
    log: &'a mut FixLog,
    scope: FixScope,
}

impl<'a> ScopedLog<'a> {
    fn new(log: &'a mut FixLog, scope: FixScope) -> Self {
        Self { log, scope }
    }

    fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(scope = %self.scope, fix = %message, "Applied fix");
        self.log.record(self.scope, message);
    }
}

/// Sets the value of the first property called `name`, keeping its
/// parameters, or appends a new property.
fn set_value(component: &mut Component, name: &str, value: String) {
    match component.get_property_mut(name) {
        Some(prop) => prop.value = value,
        None => component.add_property(Property::new(name, value)),
    }
}

/// Sets `name` when it is missing or blank. Returns whether it was set.
fn ensure_value(component: &mut Component, name: &str, value: impl FnOnce() -> String) -> bool {
    if component.has_value(name) {
        return false;
    }
    set_value(component, name, value());
    true
}
