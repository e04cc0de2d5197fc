//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit.
///
/// Lines are folded by inserting CRLF followed by a single space.
/// Care is taken not to split UTF-8 multi-byte sequences. The result
/// always ends with CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut rest = line;
    let mut first_line = true;

    while !rest.is_empty() {
        // Continuation lines have one less octet available (the leading space)
        let max_len = if first_line {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1
        };

        let mut end = rest.len().min(max_len);
        // Back up if we're in the middle of a UTF-8 character
        while end > 0 && !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            // A single character wider than the limit; emit it whole.
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }

        if !first_line {
            result.push(' ');
        }
        result.push_str(&rest[..end]);
        result.push_str("\r\n");

        rest = &rest[end..];
        first_line = false;
    }

    result
}
