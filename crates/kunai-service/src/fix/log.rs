//! ## Summary
//! Record of the corrections applied to one calendar.
//!
//! The log is a plain value. The engine appends to it and the caller decides
//! whether and where it gets written.

use std::fmt;

/// Where a fix was applied. Event and to-do numbers are 1-based positions
/// in the calendar after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixScope {
    Calendar,
    Event(usize),
    Todo(usize),
    /// Textual pass over the serialized document.
    Output,
}

impl fmt::Display for FixScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar => write!(f, "Calendar"),
            Self::Event(n) => write!(f, "Event {n}"),
            Self::Todo(n) => write!(f, "Todo {n}"),
            Self::Output => write!(f, "Output"),
        }
    }
}

/// A single correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixEntry {
    pub scope: FixScope,
    pub message: String,
}

/// ## Summary
/// Append-only, ordered list of fixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixLog {
    entries: Vec<FixEntry>,
}

impl FixLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fix.
    pub fn record(&mut self, scope: FixScope, message: impl Into<String>) {
        self.entries.push(FixEntry {
            scope,
            message: message.into(),
        });
    }

    /// Number of individual fixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[FixEntry] {
        &self.entries
    }

    /// Messages recorded for one scope, in order.
    pub fn messages_for(&self, scope: FixScope) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |e| e.scope == scope)
            .map(|e| e.message.as_str())
    }

    /// ## Summary
    /// Human-readable lines, one per fix group.
    ///
    /// Calendar and output fixes get a line each. Consecutive fixes to the
    /// same event or to-do are joined into one labelled line, e.g.
    /// `Event 2: Generated missing UID, Added missing DTSTAMP`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut group: Option<(FixScope, Vec<&str>)> = None;

        for entry in &self.entries {
            match entry.scope {
                FixScope::Calendar | FixScope::Output => {
                    flush_group(&mut lines, group.take());
                    lines.push(entry.message.clone());
                }
                scope => match &mut group {
                    Some((current, messages)) if *current == scope => {
                        messages.push(entry.message.as_str());
                    }
                    _ => {
                        flush_group(&mut lines, group.take());
                        group = Some((scope, vec![entry.message.as_str()]));
                    }
                },
            }
        }
        flush_group(&mut lines, group);

        lines
    }

    /// ## Summary
    /// One-line summary suitable for a process log.
    ///
    /// Either `No fixes applied` or `Applied N fixes: ...` where N counts
    /// individual fixes.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No fixes applied".to_string();
        }
        format!(
            "Applied {} fixes: {}",
            self.entries.len(),
            self.lines().join(", ")
        )
    }
}

fn flush_group(lines: &mut Vec<String>, group: Option<(FixScope, Vec<&str>)>) {
    if let Some((scope, messages)) = group {
        lines.push(format!("{scope}: {}", messages.join(", ")));
    }
}
