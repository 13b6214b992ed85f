//! # First-Match Splitting

use crate::errors::TcResult;
use crate::regex::RegexWrapper;

/// A subject split in two around a match boundary.
///
/// `before` and `after` are adjacent subslices of the subject, so
/// concatenating them always reproduces it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Split<'h> {
    /// The subject up to the cut point.
    pub before: &'h str,

    /// The subject from the cut point on.
    pub after: &'h str,
}

impl<'h> Split<'h> {
    /// Split `subject` at byte offset `cut`.
    fn at(
        subject: &'h str,
        cut: usize,
    ) -> Self {
        Self {
            before: &subject[..cut],
            after: &subject[cut..],
        }
    }

    /// Convert into a `(before, after)` pair.
    pub fn into_pair(self) -> (&'h str, &'h str) {
        (self.before, self.after)
    }
}

/// Split `subject` around the first match, cutting at the match **end**.
///
/// A zero-length first match yields a well-defined degenerate split at that
/// offset.
///
/// ## Arguments
/// * `re` - The compiled pattern.
/// * `subject` - The string to split.
///
/// ## Returns
/// * `Some(Split)` if the pattern matched,
/// * `None` otherwise.
///
/// ## Errors
/// [`crate::errors::TextcarveError::Scan`] if the fancy engine gives up
/// mid-scan.
pub fn split_after<'h>(
    re: &RegexWrapper,
    subject: &'h str,
) -> TcResult<Option<Split<'h>>> {
    Ok(re
        .scan_from(subject, 0)?
        .map(|m| Split::at(subject, m.end())))
}

/// Split `subject` around the first match, cutting at the match **start**.
///
/// ## Arguments
/// * `re` - The compiled pattern.
/// * `subject` - The string to split.
///
/// ## Returns
/// * `Some(Split)` if the pattern matched,
/// * `None` otherwise.
///
/// ## Errors
/// [`crate::errors::TextcarveError::Scan`] if the fancy engine gives up
/// mid-scan.
pub fn split_before<'h>(
    re: &RegexWrapper,
    subject: &'h str,
) -> TcResult<Option<Split<'h>>> {
    Ok(re
        .scan_from(subject, 0)?
        .map(|m| Split::at(subject, m.start())))
}
