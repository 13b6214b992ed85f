//! # Regex Engine Seam
//!
//! Pattern matching is delegated to external engines; nothing in this crate
//! executes a regex itself. Some useful patterns need extended machinery
//! (look-around, backreferences) that only the [`fancy_regex`] crate
//! provides; but that machinery has performance costs, so we prefer the
//! standard [`regex`] crate whenever a pattern permits it.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The compiled [`RegexWrapper`] exposes stateless scan primitives only:
//! [`RegexWrapper::scan_from`] and [`RegexWrapper::captures_from`] take an
//! explicit start offset instead of carrying a match-position cursor, so a
//! compiled pattern holds no mutable state and can be shared across threads
//! (see [`RegexWrapperHandle`]).

pub mod regex_wrapper;
pub mod scan;

#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper, RegexWrapperHandle, RegexWrapperPattern};
#[doc(inline)]
pub use scan::{CapturesWrapper, MatchSpan};
