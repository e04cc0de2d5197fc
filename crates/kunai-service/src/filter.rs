//! ## Summary
//! Date range filtering of events.
//!
//! Runs before the fix engine, so dropped events are never repaired. To-dos
//! and other components are never filtered.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use kunai_rfc::rfc::ical::core::{Component, ComponentKind, ICalendar, names};
use kunai_rfc::rfc::ical::datetime;

/// Optional inclusive window of calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Returns whether neither bound is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// ## Summary
    /// Returns whether an event starting at `start` falls outside the window.
    ///
    /// The lower bound is midnight UTC on `from`. The upper bound is
    /// midnight UTC on the day after `to`, so every event on the `to` day
    /// is kept.
    #[must_use]
    pub fn excludes(&self, start: DateTime<Utc>) -> bool {
        let before = self.from.is_some_and(|from| start < midnight(from));
        let after = self
            .to
            .and_then(|to| to.checked_add_days(Days::new(1)))
            .is_some_and(|limit| start > midnight(limit));
        before || after
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// ## Summary
/// Removes events whose DTSTART lies outside `range`. Returns how many were
/// removed.
///
/// DTSTART is normalized before parsing, so dashed forms such as
/// `2025-07-28T12:00:00` are understood. An event without a parseable
/// DTSTART is kept.
pub fn filter_events_by_range(ical: &mut ICalendar, range: &DateRange) -> usize {
    if range.is_unbounded() {
        return 0;
    }

    let before = ical.root.children.len();
    ical.root
        .retain_children(|child| child.kind != ComponentKind::Event || !is_excluded(child, range));
    let removed = before - ical.root.children.len();

    tracing::debug!(
        removed,
        from = ?range.from,
        to = ?range.to,
        "Filtered events by date range"
    );

    removed
}

fn is_excluded(event: &Component, range: &DateRange) -> bool {
    let Some(raw) = event.value_of(names::DTSTART) else {
        return false;
    };

    match datetime::parse(&datetime::normalize(raw)) {
        Ok(start) => range.excludes(start),
        Err(_) => {
            tracing::trace!(dtstart = raw, "Keeping event with unparseable DTSTART");
            false
        }
    }
}
