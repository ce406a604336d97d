use std::cmp::Ordering;

use crate::ir::JournalLine;

/// Sort key that orders embedded numbers by value, so "INV2" < "INV10" < "INV100".
/// Missing references sort after all present ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NaturalKey {
    Present(Vec<Segment>),
    Missing,
}

/// Segments alternate between text and number, starting and ending with a (possibly
/// empty) text segment, so two keys always compare segments of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// Lowercased run of non-digits
    Text(String),
    Number(Digits),
}

/// A run of ASCII digits, compared by numeric value regardless of its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        Self(significant.to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn natural_key(reference: Option<&str>) -> NaturalKey {
    let Some(mut rest) = reference else {
        return NaturalKey::Missing;
    };
    let mut segments = Vec::new();
    loop {
        let text_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        segments.push(Segment::Text(rest[..text_end].to_lowercase()));
        rest = &rest[text_end..];
        if rest.is_empty() {
            break;
        }
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        segments.push(Segment::Number(Digits::new(&rest[..digits_end])));
        rest = &rest[digits_end..];
    }
    NaturalKey::Present(segments)
}

/// Stable sort by the natural key of the journal reference.
pub fn sort_by_reference(lines: &mut [JournalLine]) {
    lines.sort_by_cached_key(|line| natural_key(line.entry.row.reference.as_deref()));
}
