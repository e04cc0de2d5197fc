//! ## Summary
//! Textual fixes applied to the serialized calendar.
//!
//! RFC 5545 §3.3.5: a TZID parameter must not be applied to a DATE-TIME in
//! UTC form. The fix engine normalizes floating DTSTART/DTEND values to UTC
//! without touching their parameters, so a `TZID` can end up next to a `Z`
//! value. This pass drops the parameter block from such lines.

use kunai_rfc::rfc::ical::build::fold_line;
use kunai_rfc::rfc::ical::core::{names, param_names};
use kunai_rfc::rfc::ical::datetime;

const LINE_BREAK: &str = "\r\n";

/// ## Summary
/// Rewrites `DTSTART;...TZID=...:<utc>` and `DTEND;...TZID=...:<utc>`
/// lines to `NAME:<utc>`.
///
/// Works on logical lines, so a folded property is unfolded before it is
/// inspected and the rewritten line is folded again. Everything else is
/// returned byte for byte. Returns the new text and the number of lines
/// rewritten.
#[must_use]
pub fn strip_utc_tzid(text: &str) -> (String, usize) {
    let physical: Vec<&str> = text.split(LINE_BREAK).collect();
    let mut output: Vec<String> = Vec::with_capacity(physical.len());
    let mut rewritten = 0;

    let mut i = 0;
    while i < physical.len() {
        let mut logical = physical[i].to_string();
        let mut end = i + 1;
        while let Some(rest) = physical.get(end).and_then(|l| continuation(l)) {
            logical.push_str(rest);
            end += 1;
        }

        match strip_line(&logical) {
            Some(line) => {
                output.push(line);
                rewritten += 1;
            }
            None => output.extend(physical[i..end].iter().map(ToString::to_string)),
        }
        i = end;
    }

    if rewritten > 0 {
        tracing::debug!(rewritten, "Removed TZID from UTC date-times");
    }

    (output.join(LINE_BREAK), rewritten)
}

fn continuation(line: &str) -> Option<&str> {
    line.strip_prefix(' ').or_else(|| line.strip_prefix('\t'))
}

/// Returns the rewritten line without its trailing line break, or `None`
/// when the line does not need a change.
fn strip_line(line: &str) -> Option<String> {
    let name = [names::DTSTART, names::DTEND]
        .into_iter()
        .find(|name| line.strip_prefix(name).is_some_and(|rest| rest.starts_with(';')))?;

    let colon = line.rfind(':')?;
    let params = line.get(name.len() + 1..colon)?;
    let value = line.get(colon + 1..)?;

    let has_tzid = params.split(';').any(|param| {
        param
            .split_once('=')
            .is_some_and(|(n, _)| n.eq_ignore_ascii_case(param_names::TZID))
    });
    if !has_tzid || !datetime::is_utc(value) {
        return None;
    }

    let folded = fold_line(&format!("{name}:{value}"));
    Some(
        folded
            .strip_suffix(LINE_BREAK)
            .unwrap_or(&folded)
            .to_string(),
    )
}
