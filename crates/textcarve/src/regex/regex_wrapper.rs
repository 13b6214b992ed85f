//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

use crate::alloc::string::{String, ToString};
use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::errors::{TcResult, TextcarveError};
use crate::regex::scan::{CapturesWrapper, MatchSpan};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexWrapperPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexWrapperPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// ## Returns
    /// The compiled `RegexWrapper`.
    ///
    /// ## Errors
    /// [`TextcarveError::InvalidPattern`] if the engine(s) this pattern is
    /// labeled for reject it.
    pub fn compile(&self) -> TcResult<RegexWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|err| invalid_pattern(pattern, err.into())),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|err| invalid_pattern(pattern, err.into())),
            Self::Adaptive(pattern) => match regex::Regex::new(pattern) {
                Ok(re) => Ok(re.into()),
                Err(basic_err) => {
                    log::debug!(
                        "pattern {pattern:?} rejected by `regex` ({basic_err}); \
                         falling back to `fancy_regex`"
                    );
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(|err| invalid_pattern(pattern, err.into()))
                }
            },
        }
    }
}

fn invalid_pattern(
    pattern: &str,
    source: ErrorWrapper,
) -> TextcarveError {
    TextcarveError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}

/// Common Regex Wrapper Handle Type
///
/// Compiled patterns hold no scan state, so one handle can be cloned into
/// as many threads as needed.
pub type RegexWrapperHandle = Arc<RegexWrapper>;

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Find the first match at or after byte offset `start`.
    ///
    /// The whole haystack remains in context: anchors and look-behind see
    /// the text before `start`, as with the engines' own offset searches
    /// (`find_at` / `find_from_pos`).
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `start` - The byte offset to search from; at most `haystack.len()`.
    ///
    /// ## Returns
    /// The earliest match at or after `start`, or `None`.
    ///
    /// ## Errors
    /// [`TextcarveError::Scan`] if the fancy engine gives up mid-scan.
    pub fn scan_from<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> TcResult<Option<MatchSpan<'h>>> {
        match self {
            Self::Basic(regex) => Ok(regex.find_at(haystack, start).map(MatchSpan::from)),
            Self::Fancy(regex) => regex
                .find_from_pos(haystack, start)
                .map(|m| m.map(MatchSpan::from))
                .map_err(|err| TextcarveError::Scan(err.into())),
        }
    }

    /// Like [`Self::scan_from`], but with capture groups.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `start` - The byte offset to search from; at most `haystack.len()`.
    ///
    /// ## Returns
    /// The capture groups of the earliest match at or after `start`,
    /// or `None`.
    ///
    /// ## Errors
    /// [`TextcarveError::Scan`] if the fancy engine gives up mid-scan.
    pub fn captures_from<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> TcResult<Option<CapturesWrapper<'h>>> {
        match self {
            Self::Basic(regex) => {
                Ok(regex.captures_at(haystack, start).map(CapturesWrapper::from))
            }
            Self::Fancy(regex) => regex
                .captures_from_pos(haystack, start)
                .map(|caps| caps.map(CapturesWrapper::from))
                .map_err(|err| TextcarveError::Scan(err.into())),
        }
    }

    /// Get the declared named capture groups, in declaration order.
    ///
    /// ## Returns
    /// The group names; unnamed groups are skipped.
    pub fn named_groups(&self) -> Vec<&str> {
        match self {
            Self::Basic(regex) => regex.capture_names().flatten().collect(),
            Self::Fancy(regex) => regex.capture_names().flatten().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_engine_selection() {
        // Plain patterns land on the basic engine.
        let re = RegexWrapperPattern::from(r"\d+").compile().unwrap();
        assert!(re.is_basic());
        assert_eq!(re.as_str(), r"\d+");

        // Look-around forces the fancy engine.
        let re = RegexWrapperPattern::from(r"foo(?=bar)").compile().unwrap();
        assert!(re.is_fancy());
    }

    #[test]
    fn test_forced_labels() {
        let label = RegexWrapperPattern::Fancy(r"\d+".into());
        assert_eq!(label.as_str(), r"\d+");

        let re = label.compile().unwrap();
        assert!(re.is_fancy());

        // A fancy-only pattern labeled Basic is an InvalidPattern error.
        let err = RegexWrapperPattern::Basic(r"foo(?=bar)".into())
            .compile()
            .unwrap_err();
        assert!(matches!(
            err,
            TextcarveError::InvalidPattern { ref pattern, .. } if pattern == r"foo(?=bar)"
        ));
    }

    #[test]
    fn test_invalid_on_both_engines() {
        let err = RegexWrapperPattern::from(r"(unclosed").compile().unwrap_err();
        assert!(matches!(err, TextcarveError::InvalidPattern { .. }));
    }

    #[test]
    fn test_scan_from_offsets() {
        for label in [
            RegexWrapperPattern::Basic(r"\d+".into()),
            RegexWrapperPattern::Fancy(r"\d+".into()),
        ] {
            let re = label.compile().unwrap();

            let m = re.scan_from("a12b34", 0).unwrap().unwrap();
            assert_eq!((m.start(), m.end()), (1, 3));

            let m = re.scan_from("a12b34", 3).unwrap().unwrap();
            assert_eq!((m.start(), m.end()), (4, 6));

            assert_eq!(re.scan_from("a12b34", 6).unwrap(), None);
        }
    }

    #[test]
    fn test_scan_from_keeps_lookbehind_context() {
        let re = RegexWrapperPattern::from(r"(?<=b)\d").compile().unwrap();
        assert!(re.is_fancy());

        // Scanning from offset 2 still sees the "b" at offset 1.
        let m = re.scan_from("ab1c2b3", 2).unwrap().unwrap();
        assert_eq!((m.start(), m.as_str()), (2, "1"));

        // "2" is preceded by "c", so the next hit is "3".
        let m = re.scan_from("ab1c2b3", 3).unwrap().unwrap();
        assert_eq!((m.start(), m.as_str()), (6, "3"));
    }

    #[test]
    fn test_shared_handle() {
        let handle: RegexWrapperHandle =
            Arc::new(RegexWrapperPattern::from(r"\d+").compile().unwrap());

        let clone = Arc::clone(&handle);
        assert_eq!(clone.scan_from("a1", 0).unwrap().unwrap().as_str(), "1");
        assert_eq!(handle.scan_from("a1", 0).unwrap().unwrap().as_str(), "1");
    }

    #[test]
    fn test_named_groups_declaration_order() {
        let re = RegexWrapperPattern::from(r"(?<year>\d{4})-(\d+)-(?<day>\d{2})")
            .compile()
            .unwrap();
        assert_eq!(re.named_groups(), ["year", "day"]);
    }
}
