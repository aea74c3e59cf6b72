//! Assertion helpers that turn a mismatch into [`HarnessError::AssertionMismatch`].

use crate::error::{HarnessError, Result};

pub fn expect_eq(check: &str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(HarnessError::mismatch(check, expected, actual))
    }
}

pub fn expect_true(check: &str, condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(HarnessError::mismatch(check, "true", "false"))
    }
}

pub fn expect_false(check: &str, condition: bool) -> Result<()> {
    if condition {
        Err(HarnessError::mismatch(check, "false", "true"))
    } else {
        Ok(())
    }
}

/// Case-insensitive substring check. Lowercasing is Unicode-aware, so
/// Cyrillic phrases compare correctly.
pub fn expect_contains(check: &str, haystack: &str, needle: &str) -> Result<()> {
    expect_contains_any(check, haystack, &[needle])
}

/// Case-insensitive: passes if any needle occurs in `haystack`.
pub fn expect_contains_any(check: &str, haystack: &str, needles: &[&str]) -> Result<()> {
    let lowered = haystack.to_lowercase();
    if needles.iter().any(|n| lowered.contains(&n.to_lowercase())) {
        return Ok(());
    }
    Err(containment_mismatch(check, haystack, needles))
}

/// Exact-case substring check, for class names and button labels.
pub fn expect_contains_exact(check: &str, haystack: &str, needle: &str) -> Result<()> {
    expect_contains_any_exact(check, haystack, &[needle])
}

pub fn expect_contains_any_exact(check: &str, haystack: &str, needles: &[&str]) -> Result<()> {
    if needles.iter().any(|n| haystack.contains(n)) {
        return Ok(());
    }
    Err(containment_mismatch(check, haystack, needles))
}

fn containment_mismatch(check: &str, haystack: &str, needles: &[&str]) -> HarnessError {
    let expected = match needles {
        [one] => format!("text containing {:?}", one),
        many => format!("text containing any of {:?}", many),
    };
    HarnessError::mismatch(check, expected, haystack)
}
