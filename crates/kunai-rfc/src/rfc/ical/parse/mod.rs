//! iCalendar parsing primitives (RFC 5545).
//!
//! This module provides parsers for iCalendar content:
//! - Lexer: Content line splitting, unfolding and tokenization
//! - Parser: Full document parsing into the component tree

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::{MAX_DEPTH, parse};
