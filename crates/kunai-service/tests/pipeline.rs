//! End-to-end scenarios for the repair pipeline.

use chrono::NaiveDate;
use kunai_rfc::error::RfcError;
use kunai_rfc::rfc::ical::parse::{ParseErrorKind, parse};
use kunai_service::error::ServiceError;
use kunai_service::fix::{FixOptions, FixScope};
use kunai_service::pipeline::{DateRange, process};

const SEASONS: &str = "BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Test//Test Calendar//EN
BEGIN:VEVENT
UID:event1@example.com
DTSTART:20250101T120000Z
DTEND:20250101T130000Z
SUMMARY:New Year Event
END:VEVENT
BEGIN:VEVENT
UID:event2@example.com
DTSTART:20250615T140000Z
DTEND:20250615T150000Z
SUMMARY:Summer Event
END:VEVENT
BEGIN:VEVENT
UID:event3@example.com
DTSTART:20251225T180000Z
DTEND:20251225T190000Z
SUMMARY:Christmas Event
END:VEVENT
END:VCALENDAR";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn run(input: &str, range: DateRange) -> kunai_service::pipeline::Processed {
    process(input.as_bytes(), &range, &FixOptions::default()).unwrap()
}

#[test_log::test]
fn empty_input_is_rejected() {
    let err = process(b"", &DateRange::default(), &FixOptions::default()).unwrap_err();
    assert!(matches!(err, ServiceError::EmptyInput));
}

#[test_log::test]
fn malformed_document_is_rejected() {
    let err = process(
        b"this is not a calendar",
        &DateRange::default(),
        &FixOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidCalendar(_)));
    assert!(err.to_string().starts_with("invalid iCal format"));
}

#[test_log::test]
fn unbalanced_document_is_rejected() {
    let err = process(
        b"BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VCALENDAR\r\n",
        &DateRange::default(),
        &FixOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidCalendar(_)));
}

#[test_log::test]
fn deeply_nested_document_is_rejected() {
    let mut input = String::from("BEGIN:VCALENDAR\r\n");
    input.push_str(&"BEGIN:X-A\r\n".repeat(200_000));
    input.push_str("END:VCALENDAR\r\n");

    let err = process(input.as_bytes(), &DateRange::default(), &FixOptions::default())
        .unwrap_err();
    assert!(
        matches!(
            &err,
            ServiceError::InvalidCalendar(RfcError::ParseError(e))
                if e.kind == ParseErrorKind::NestingTooDeep
        ),
        "{err:?}"
    );
}

#[test_log::test]
fn output_uses_crlf_throughout() {
    let out = run(SEASONS, DateRange::default());

    assert!(out.calendar.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(out.calendar.ends_with("END:VCALENDAR\r\n"));
    assert!(!out.calendar.replace("\r\n", "").contains('\n'));
}

#[test_log::test]
fn well_formed_events_only_gain_optional_properties() {
    let out = run(SEASONS, DateRange::default());

    assert_eq!(out.removed_events, 0);
    assert_eq!(out.calendar.matches("BEGIN:VEVENT").count(), 3);
    assert!(out.log.messages_for(FixScope::Calendar).eq(["Added missing CALSCALE (GREGORIAN)"]));
    for n in 1..=3 {
        assert!(
            out.log
                .messages_for(FixScope::Event(n))
                .all(|m| m.starts_with("Added missing"))
        );
    }
}

#[test_log::test]
fn summer_window() {
    let out = run(SEASONS, DateRange::new(Some(date("2025-06-01")), Some(date("2025-08-31"))));

    assert_eq!(out.removed_events, 2);
    assert!(out.calendar.contains("Summer Event"));
    assert!(!out.calendar.contains("New Year Event"));
    assert!(!out.calendar.contains("Christmas Event"));
}

#[test_log::test]
fn first_half_of_year() {
    let out = run(SEASONS, DateRange::new(Some(date("2025-01-01")), Some(date("2025-06-30"))));

    assert_eq!(out.calendar.matches("BEGIN:VEVENT").count(), 2);
    assert!(!out.calendar.contains("Christmas Event"));
}

#[test_log::test]
fn end_of_year() {
    let out = run(SEASONS, DateRange::new(Some(date("2025-12-01")), None));

    assert_eq!(out.calendar.matches("BEGIN:VEVENT").count(), 1);
    assert!(out.calendar.contains("Christmas Event"));
}

#[test_log::test]
fn floating_time_with_tzid_becomes_plain_utc() {
    let input = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//EN\r\n\
CALSCALE:GREGORIAN\r\n\
BEGIN:VEVENT\r\n\
UID:berlin@example.com\r\n\
DTSTAMP:20250101T000000Z\r\n\
DTSTART;TZID=Europe/Berlin:20250728T120000\r\n\
DTEND;TZID=Europe/Berlin:20250728T130000\r\n\
SUMMARY:Berlin\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let out = run(input, DateRange::default());

    assert!(out.calendar.contains("\r\nDTSTART:20250728T120000Z\r\n"));
    assert!(out.calendar.contains("\r\nDTEND:20250728T130000Z\r\n"));
    assert!(!out.calendar.contains("TZID=Europe/Berlin"));
    assert!(
        out.log
            .messages_for(FixScope::Output)
            .eq(["Removed TZID parameters from UTC times"])
    );
}

#[test_log::test]
fn output_parses_and_is_stable() {
    let input = "BEGIN:VCALENDAR\n\
BEGIN:VEVENT\n\
DTSTART:2025-07-28\n\
SUMMARY:Needs work\\, lots\n\
CLASS:TOP-SECRET\n\
BEGIN:VALARM\n\
ACTION:EMAIL\n\
END:VALARM\n\
END:VEVENT\n\
BEGIN:VTODO\n\
END:VTODO\n\
END:VCALENDAR\n";
    let first = run(input, DateRange::default());
    assert!(!first.log.is_empty());

    let reparsed = parse(&first.calendar).unwrap();
    let event = reparsed.events()[0];
    assert_eq!(event.value_of("CLASS"), Some("PUBLIC"));
    assert_eq!(event.value_of("DTSTART"), Some("20250728T000000Z"));
    assert_eq!(event.alarms()[0].value_of("DESCRIPTION"), Some("Needs work\\, lots"));

    let second = run(&first.calendar, DateRange::default());
    assert!(second.log.is_empty(), "{:?}", second.log.lines());
    assert_eq!(second.calendar, first.calendar);
}

#[test_log::test]
fn byte_order_mark_and_invalid_utf8_are_tolerated() {
    let mut data = b"\xEF\xBB\xBFBEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nSUMMARY:caf".to_vec();
    data.extend_from_slice(b"\xE9\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n");

    let out = process(&data, &DateRange::default(), &FixOptions::default()).unwrap();
    assert!(out.calendar.contains("SUMMARY:caf\u{fffd}\r\n"));
}

#[test_log::test]
fn summary_mentions_every_group() {
    let out = run(
        "BEGIN:VCALENDAR\nBEGIN:VEVENT\nEND:VEVENT\nEND:VCALENDAR\n",
        DateRange::default(),
    );
    let summary = out.log.summary();

    assert!(summary.starts_with(&format!("Applied {} fixes: ", out.log.len())));
    assert!(summary.contains("Set VERSION to 2.0"));
    assert!(summary.contains("Event 1: Generated missing UID"));
}
