//! Signature comparison strategies.
//!
//! Token verification ends with comparing the recomputed signature to the
//! one carried in the token. The step is a trait so the default plain
//! equality can be swapped for a constant-time comparison without
//! touching the hash code.

use subtle::ConstantTimeEq;

/// Decide whether a supplied signature equals the expected one.
pub trait SignatureComparator: Send + Sync {
    fn matches(&self, expected: &str, supplied: &str) -> bool;
}

/// Ordinary string equality. Matches the behavior of tokens issued so far.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainComparator;

impl SignatureComparator for PlainComparator {
    fn matches(&self, expected: &str, supplied: &str) -> bool {
        expected == supplied
    }
}

/// Constant-time byte comparison via `subtle`.
///
/// Length differences still return early; only the content comparison
/// is constant-time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantTimeComparator;

impl SignatureComparator for ConstantTimeComparator {
    fn matches(&self, expected: &str, supplied: &str) -> bool {
        expected.as_bytes().ct_eq(supplied.as_bytes()).into()
    }
}
