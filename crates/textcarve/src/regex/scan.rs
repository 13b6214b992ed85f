//! # Scan Views
//! Engine-neutral views over one match and its capture groups.

use core::ops::Range;

/// A single match of a pattern in a haystack.
///
/// Offsets are byte offsets into the haystack; `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchSpan<'h> {
    start: usize,
    end: usize,
    text: &'h str,
}

impl<'h> MatchSpan<'h> {
    /// The match's start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The match's end offset (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// The match's byte range in the haystack.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched substring.
    pub fn as_str(&self) -> &'h str {
        self.text
    }

    /// Is this a zero-length match?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<'h> From<regex::Match<'h>> for MatchSpan<'h> {
    fn from(m: regex::Match<'h>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        }
    }
}

impl<'h> From<fancy_regex::Match<'h>> for MatchSpan<'h> {
    fn from(m: fancy_regex::Match<'h>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        }
    }
}

/// Wrapper for the capture groups of one match.
pub enum CapturesWrapper<'h> {
    /// Captures from `regex`.
    Basic(regex::Captures<'h>),

    /// Captures from `fancy_regex`.
    Fancy(fancy_regex::Captures<'h>),
}

impl<'h> From<regex::Captures<'h>> for CapturesWrapper<'h> {
    fn from(caps: regex::Captures<'h>) -> Self {
        Self::Basic(caps)
    }
}

impl<'h> From<fancy_regex::Captures<'h>> for CapturesWrapper<'h> {
    fn from(caps: fancy_regex::Captures<'h>) -> Self {
        Self::Fancy(caps)
    }
}

impl<'h> CapturesWrapper<'h> {
    /// The overall match (group 0, which always participates).
    pub fn whole(&self) -> MatchSpan<'h> {
        match self {
            Self::Basic(caps) => caps.get(0).map(MatchSpan::from).unwrap(),
            Self::Fancy(caps) => caps.get(0).map(MatchSpan::from).unwrap(),
        }
    }

    /// The named group's match, or `None` if the group did not
    /// participate in this match.
    pub fn name(&self, name: &str) -> Option<MatchSpan<'h>> {
        match self {
            Self::Basic(caps) => caps.name(name).map(MatchSpan::from),
            Self::Fancy(caps) => caps.name(name).map(MatchSpan::from),
        }
    }
}
