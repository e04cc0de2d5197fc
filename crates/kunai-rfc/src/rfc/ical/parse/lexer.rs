//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Splits input into content lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. Lines starting with SP/HTAB are
/// treated as continuations of the previous line. Per RFC 5545 §3.1, unfolding
/// removes the CRLF and the whitespace character (no space is inserted).
///
/// Returns `(line_number, logical_line)` pairs, numbered by the physical line
/// each logical line starts on.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            // RFC 5545 §3.1: unfold by removing CRLF + whitespace (no space added)
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else if !line.contains(':') {
            // Lenient: treat lines without a colon as folded continuations.
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(line);
            } else {
                lines.push((i + 1, line.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Byte cursor over one logical content line.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    line_num: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, line_num: usize) -> Self {
        Self {
            line,
            pos: 0,
            line_num,
        }
    }

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Error positioned at the cursor (1-based column).
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line_num, self.pos + 1)
    }

    fn missing_colon(&self) -> ParseError {
        ParseError::new(ParseErrorKind::MissingColon, self.line_num, self.line.len())
    }

    /// Consumes a run of name characters (`ALPHA / DIGIT / "-"`) and stops at
    /// the first character in `stops`. Anything else is reported as `invalid`.
    fn name(&mut self, stops: &[char], invalid: ParseErrorKind) -> ParseResult<&'a str> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(c) if stops.contains(&c) => return Ok(&self.line[start..self.pos]),
                Some(c) if c.is_ascii_alphanumeric() || c == '-' => {
                    self.bump();
                }
                Some(_) => return Err(self.error(invalid)),
                None => return Err(self.missing_colon()),
            }
        }
    }
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut cursor = Cursor::new(line, line_num);

    let name = cursor.name(&[';', ':'], ParseErrorKind::InvalidPropertyName)?;
    if name.is_empty() {
        return Err(ParseError::new(ParseErrorKind::MissingPropertyName, line_num, 1));
    }

    let mut params = Vec::new();
    while cursor.bump() == Some(';') {
        params.push(parse_parameter(&mut cursor)?);
    }

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        raw_value: cursor.rest().to_string(),
    })
}

/// Parses `name "=" value *("," value)`, leaving the cursor on the `;` or
/// `:` that follows.
fn parse_parameter(cursor: &mut Cursor<'_>) -> ParseResult<Parameter> {
    let name = cursor.name(&['='], ParseErrorKind::InvalidParameter)?;
    if name.is_empty() {
        return Err(cursor.error(ParseErrorKind::InvalidParameter));
    }
    cursor.bump();

    let mut values = vec![parse_param_value(cursor)?];
    loop {
        match cursor.peek() {
            Some(',') => {
                cursor.bump();
                values.push(parse_param_value(cursor)?);
            }
            Some(';' | ':') => return Ok(Parameter::with_values(name.to_ascii_uppercase(), values)),
            Some(c) => {
                return Err(cursor
                    .error(ParseErrorKind::InvalidParameter)
                    .with_context(format!("unexpected character '{c}'")));
            }
            None => return Err(cursor.missing_colon()),
        }
    }
}

/// Parses one parameter value, quoted or not. Quoted values decode RFC 6868
/// caret escapes.
fn parse_param_value(cursor: &mut Cursor<'_>) -> ParseResult<String> {
    if cursor.peek() != Some('"') {
        let rest = cursor.rest();
        let end = rest.find([',', ';', ':']).unwrap_or(rest.len());
        cursor.pos += end;
        return Ok(rest[..end].to_string());
    }

    let open = cursor.error(ParseErrorKind::UnclosedQuote);
    cursor.bump();

    let mut value = String::new();
    while let Some(c) = cursor.bump() {
        match c {
            '"' => return Ok(value),
            '^' => match cursor.peek() {
                Some('^') => {
                    cursor.bump();
                    value.push('^');
                }
                Some('n') => {
                    cursor.bump();
                    value.push('\n');
                }
                Some('\'') => {
                    cursor.bump();
                    value.push('"');
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(open)
}
