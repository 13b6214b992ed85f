//! # `textcarve` Regex Segmentation Library
//!
//! `textcarve` reshapes the output of the Rust regex engines into the two
//! forms callers of a host-language regex binding actually want:
//!
//! * [`captures`] to pull the named capture groups out of every
//!   non-overlapping match of a pattern.
//! * [`segmentation`] to split a subject into a `(before, after)` pair around
//!   the first match.
//!
//! The pattern matching itself is delegated entirely to the `regex` and
//! `fancy_regex` crates; see [`crate::regex`] for the engine seam. There is
//! no matching machinery in this crate, only the adaptation layer.
//!
//! Compiled patterns ([`crate::regex::RegexWrapper`]) carry no scan cursor or
//! other mutable state: every operation takes an explicit start offset, so a
//! compiled pattern can be shared freely across threads (see
//! [`crate::regex::RegexWrapperHandle`]).
//!
//! ## Crate Features
//!
//! #### feature: ``std`` (default)
//!
//! The "std" feature enables the use of the `std` library;
//! without it the crate builds against `core` + `alloc` only.
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod captures;
pub mod errors;
pub mod regex;
pub mod segmentation;
