//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-segment output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that matches exactly one rendered segment line
pub fn segment_line(expected: &str) -> impl Predicate<str> {
    predicates::str::diff(format!("{expected}\n"))
}

/// Creates a predicate that checks for the no-upstream marker
pub fn has_gone_marker() -> impl Predicate<str> {
    predicates::str::contains(" !=")
}

/// Creates a predicate that checks for an error message on stderr
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}
