//! Hash primitives shared by slugs and tokens.
//!
//! This module provides:
//! - The keyed DJB2-style expansion and signature (`djb2`)
//! - Swappable signature comparison (`compare`)

pub mod compare;
pub mod djb2;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{multi_round, dual_hash_signature, ...};
pub use compare::{ConstantTimeComparator, PlainComparator, SignatureComparator};
pub use djb2::{dual_hash_signature, multi_round, multi_round_each, to_base36};
