//! # Named Capture Extraction

use crate::alloc::string::{String, ToString};
use crate::alloc::vec::Vec;
use crate::errors::TcResult;
use crate::regex::{MatchSpan, RegexWrapper};

/// A named capture group that participated in one match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedCapture {
    /// The group's declared name.
    pub name: String,

    /// The captured substring.
    pub value: String,
}

impl NamedCapture {
    /// Build a new [`NamedCapture`].
    ///
    /// ## Arguments
    /// * `name` - The group's declared name.
    /// * `value` - The captured substring.
    pub fn new<N, V>(
        name: N,
        value: V,
    ) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            name: name.as_ref().to_string(),
            value: value.as_ref().to_string(),
        }
    }
}

/// The named captures of one match, in group declaration order.
///
/// A group which did not participate in the match (an alternation branch
/// not taken) is absent, not present-with-empty-value.
pub type CaptureReport = Vec<NamedCapture>;

/// Extract the named captures of every non-overlapping match.
///
/// Performs a single left-to-right, leftmost-first scan of `subject` and
/// builds one [`CaptureReport`] per match, in match order. A match of a
/// pattern with no named groups contributes an empty report; a subject with
/// no matches yields an empty vector.
///
/// Zero-length matches are reported at every position where the pattern
/// matches empty, including positions adjacent to a non-empty match. (The
/// engines' `find_iter` suppresses those adjacent empties; host-language
/// scan-all APIs do not, and this scan follows the latter accounting.)
///
/// ## Arguments
/// * `re` - The compiled pattern.
/// * `subject` - The string to scan.
///
/// ## Returns
/// One report per match, in match order.
///
/// ## Errors
/// [`crate::errors::TextcarveError::Scan`] if the fancy engine gives up
/// mid-scan.
pub fn extract_all_captures(
    re: &RegexWrapper,
    subject: &str,
) -> TcResult<Vec<CaptureReport>> {
    let names = re.named_groups();

    let mut reports = Vec::new();
    let mut at = 0;
    while at <= subject.len() {
        let caps = match re.captures_from(subject, at)? {
            Some(caps) => caps,
            None => break,
        };

        reports.push(
            names
                .iter()
                .filter_map(|&name| {
                    caps.name(name)
                        .map(|m| NamedCapture::new(name, m.as_str()))
                })
                .collect(),
        );

        at = next_scan_start(subject, &caps.whole());
    }

    Ok(reports)
}

/// The offset where a non-overlapping scan resumes after `m`: past its end,
/// or one `char` forward for a zero-length match (past the subject end when
/// there is no next char, which terminates the scan).
fn next_scan_start(
    subject: &str,
    m: &MatchSpan<'_>,
) -> usize {
    if m.is_empty() {
        subject[m.end()..]
            .chars()
            .next()
            .map_or(subject.len() + 1, |c| m.end() + c.len_utf8())
    } else {
        m.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::regex::RegexWrapperPattern;

    #[test]
    fn test_named_groups_per_match() {
        let re = RegexWrapperPattern::from(r"(?<year>\d{4})-(?<month>\d{2})")
            .compile()
            .unwrap();

        assert_eq!(
            extract_all_captures(&re, "2024-05 and 2025-06").unwrap(),
            vec![
                vec![
                    NamedCapture::new("year", "2024"),
                    NamedCapture::new("month", "05"),
                ],
                vec![
                    NamedCapture::new("year", "2025"),
                    NamedCapture::new("month", "06"),
                ],
            ]
        );
    }

    #[test]
    fn test_no_named_groups() {
        let re = RegexWrapperPattern::from(r"\d+").compile().unwrap();

        // Two matches, each an empty report.
        assert_eq!(
            extract_all_captures(&re, "a1b2").unwrap(),
            vec![CaptureReport::new(), CaptureReport::new()]
        );
    }

    #[test]
    fn test_no_matches() {
        let re = RegexWrapperPattern::from(r"\d+").compile().unwrap();
        assert!(extract_all_captures(&re, "no digits here").unwrap().is_empty());
        assert!(extract_all_captures(&re, "").unwrap().is_empty());
    }

    #[test]
    fn test_nonparticipating_group_absent() {
        let re = RegexWrapperPattern::from(r"(?<a>x)|(?<b>y)").compile().unwrap();

        assert_eq!(
            extract_all_captures(&re, "xy").unwrap(),
            vec![
                vec![NamedCapture::new("a", "x")],
                vec![NamedCapture::new("b", "y")],
            ]
        );
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let re = RegexWrapperPattern::from(r"\d*").compile().unwrap();

        // Empty at 0, "1" at 1..2, empty at 2.
        assert_eq!(extract_all_captures(&re, "a1").unwrap().len(), 3);
    }

    #[test]
    fn test_empty_match_adjacent_to_nonempty() {
        let re = RegexWrapperPattern::from(r"a*").compile().unwrap();

        // "aaa" at 0..3, empty at 3, "aaa" at 4..7, empty at 7. The empties
        // next to the non-empty runs are kept, not suppressed.
        assert_eq!(extract_all_captures(&re, "aaabaaa").unwrap().len(), 4);
    }

    #[test]
    fn test_zero_length_advance_is_char_aligned() {
        let re = RegexWrapperPattern::from(r"x*").compile().unwrap();

        // One empty match per char boundary; must not split the multi-byte
        // chars.
        assert_eq!(extract_all_captures(&re, "héé").unwrap().len(), 4);
    }

    #[test]
    fn test_fancy_pattern_captures() {
        let re = RegexWrapperPattern::from(r"(?<word>\w+)(?=!)").compile().unwrap();
        assert!(re.is_fancy());

        assert_eq!(
            extract_all_captures(&re, "yes! no? maybe!").unwrap(),
            vec![
                vec![NamedCapture::new("word", "yes")],
                vec![NamedCapture::new("word", "maybe")],
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let re = RegexWrapperPattern::from(r"(?<d>\d+)").compile().unwrap();

        let first = extract_all_captures(&re, "a1b22c333").unwrap();
        let second = extract_all_captures(&re, "a1b22c333").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
