//! ## Summary
//! The end-to-end repair pipeline.
//!
//! bytes → parse → date range filter → fix engine → serialize → TZID strip.
//!
//! Everything here is synchronous and works on data the call owns. Callers
//! on an async runtime should run it on a blocking thread.

use kunai_rfc::error::RfcError;
use kunai_rfc::rfc::ical::{parse, serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::filter::filter_events_by_range;
use crate::fix::{FixLog, FixOptions, FixScope, fix_calendar};
use crate::postprocess::strip_utc_tzid;

pub use crate::filter::DateRange;

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct Processed {
    /// The repaired calendar with CRLF line breaks.
    pub calendar: String,
    /// Every fix applied, in order.
    pub log: FixLog,
    /// Events dropped by the date range filter.
    pub removed_events: usize,
}

/// ## Summary
/// Parses, filters, repairs and serializes an iCalendar document.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// ## Errors
///
/// Returns [`ServiceError::EmptyInput`] for an empty body and
/// [`ServiceError::InvalidCalendar`] if the document cannot be parsed.
/// Problems with individual property values are repaired, never reported.
#[tracing::instrument(skip(data, options), fields(input_len = data.len()))]
pub fn process(data: &[u8], range: &DateRange, options: &FixOptions) -> ServiceResult<Processed> {
    if data.is_empty() {
        tracing::warn!("Refusing to process empty iCalendar data");
        return Err(ServiceError::EmptyInput);
    }

    tracing::debug!("Starting iCalendar processing");

    let text = String::from_utf8_lossy(data);
    let mut ical = parse(&text).map_err(RfcError::from)?;

    let removed_events = filter_events_by_range(&mut ical, range);

    let mut log = fix_calendar(&mut ical, options);

    let (calendar, rewritten) = strip_utc_tzid(&serialize(&ical));
    if rewritten > 0 {
        log.record(FixScope::Output, "Removed TZID parameters from UTC times");
    }

    tracing::debug!(
        fixes = log.len(),
        removed_events,
        output_len = calendar.len(),
        "iCalendar processing complete"
    );

    Ok(Processed {
        calendar,
        log,
        removed_events,
    })
}
