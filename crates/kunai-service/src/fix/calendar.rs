//! Calendar-level properties: VERSION, PRODID, CALSCALE.

use kunai_rfc::rfc::ical::core::{Component, Property, names};

use super::{FixContext, ScopedLog, set_value};

const VERSION: &str = "2.0";
const GREGORIAN: &str = "GREGORIAN";

pub(super) fn fix_calendar_properties(root: &mut Component, ctx: &FixContext<'_>, log: &mut ScopedLog<'_>) {
    if root.value_of(names::VERSION) != Some(VERSION) {
        set_value(root, names::VERSION, VERSION.to_string());
        log.record("Set VERSION to 2.0");
    }

    // An existing PRODID is kept however odd it looks.
    if !root.has_value(names::PRODID) {
        root.set_property(Property::text(names::PRODID, &ctx.options.prodid));
        log.record("Added missing PRODID");
    }

    let calscale = root
        .value_of(names::CALSCALE)
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string);
    match calscale.as_deref() {
        None => {
            set_value(root, names::CALSCALE, GREGORIAN.to_string());
            log.record("Added missing CALSCALE (GREGORIAN)");
        }
        Some(GREGORIAN) => {}
        Some(other) => {
            log.record(format!("Changed unsupported CALSCALE '{other}' to GREGORIAN"));
            set_value(root, names::CALSCALE, GREGORIAN.to_string());
        }
    }
}
