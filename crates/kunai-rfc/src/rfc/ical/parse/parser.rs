//! iCalendar document parser (RFC 5545).
//!
//! Parses complete iCalendar documents into the component tree. Property
//! values are not interpreted here, so value-level problems never fail a
//! parse; only structural problems do.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use crate::rfc::ical::core::{Component, ComponentKind, ContentLine, ICalendar, Property};

/// Deepest component nesting accepted, counting VCALENDAR as level 1.
/// Real feeds stop at 3 (VCALENDAR, VTIMEZONE, STANDARD).
pub const MAX_DEPTH: usize = 32;

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is empty, a content line is malformed, the
/// BEGIN/END structure is unbalanced, components nest deeper than
/// [`MAX_DEPTH`], or the root is not a VCALENDAR.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let lines = split_lines(input);

    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::EmptyInput, 1, 1));
    }

    tracing::trace!(count = lines.len(), "Split lines");

    let content_lines: Vec<(usize, ContentLine)> = lines
        .into_iter()
        .map(|(line_num, line)| parse_content_line(&line, line_num).map(|cl| (line_num, cl)))
        .collect::<ParseResult<_>>()?;

    let mut iter = content_lines.into_iter();

    let (line_num, first) = iter
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::EmptyInput, 1, 1))?;

    if first.name != "BEGIN" {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context(format!("expected BEGIN:VCALENDAR, got {}", first.name)));
    }

    let root_name = first.raw_value.trim().to_ascii_uppercase();
    if ComponentKind::parse(&root_name) != ComponentKind::Calendar {
        tracing::warn!(root = %root_name, "Root component is not VCALENDAR");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context("expected VCALENDAR"));
    }

    let root = parse_component(&mut iter, line_num, &root_name, 1)?;

    let trailing = iter.count();
    if trailing > 0 {
        tracing::debug!(trailing, "Ignoring content after END:VCALENDAR");
    }

    tracing::debug!(
        properties = root.properties.len(),
        children = root.children.len(),
        "iCalendar document parsed successfully"
    );

    Ok(ICalendar { root })
}

/// Parses a component whose BEGIN line has already been consumed.
fn parse_component(
    iter: &mut impl Iterator<Item = (usize, ContentLine)>,
    begin_line_num: usize,
    component_name: &str,
    depth: usize,
) -> ParseResult<Component> {
    let mut component = Component::custom(component_name);
    let mut last_line_num = begin_line_num;

    loop {
        let Some((line_num, content_line)) = iter.next() else {
            return Err(
                ParseError::new(ParseErrorKind::MissingEnd, last_line_num, 1)
                    .with_context(format!("missing END:{component_name}")),
            );
        };
        last_line_num = line_num;

        match content_line.name.as_str() {
            "BEGIN" => {
                let nested_name = content_line.raw_value.trim().to_ascii_uppercase();
                if depth >= MAX_DEPTH {
                    return Err(
                        ParseError::new(ParseErrorKind::NestingTooDeep, line_num, 1)
                            .with_context(format!(
                                "BEGIN:{nested_name} exceeds {MAX_DEPTH} nested components"
                            )),
                    );
                }
                let nested = parse_component(iter, line_num, &nested_name, depth + 1)?;
                component.children.push(nested);
            }
            "END" => {
                let end_name = content_line.raw_value.trim().to_ascii_uppercase();
                if end_name != component_name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{component_name}, got END:{end_name}"
                            )),
                    );
                }
                return Ok(component);
            }
            _ => component.properties.push(Property::from(content_line)),
        }
    }
}
