//! VTODO repairs. Only the required properties are touched.

use kunai_rfc::rfc::ical::core::{Component, names};

use super::uid::generate_uid;
use super::{FixContext, ScopedLog, ensure_value};

const DEFAULT_SUMMARY: &str = "Task";

pub(super) fn fix_todo(todo: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    if ensure_value(todo, names::UID, || generate_uid(&ctx.options.uid_domain)) {
        log.record("Generated missing UID for TODO");
    }

    if ensure_value(todo, names::DTSTAMP, || ctx.stamp()) {
        log.record("Added missing DTSTAMP to TODO");
    }

    if ensure_value(todo, names::SUMMARY, || DEFAULT_SUMMARY.to_string()) {
        log.record("Added default SUMMARY to TODO");
    }
}
