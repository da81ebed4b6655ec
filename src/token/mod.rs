//! Token module — storage-free, time-limited admin tokens.
//!
//! This module provides:
//! - `TokenAuthenticator` and the `issue_token` / `verify_token` shortcuts (`authenticator`)
//! - The `Clock` time source and its system and fixed implementations (`clock`)

pub mod authenticator;
pub mod clock;

pub use authenticator::{issue_token, verify_token, TokenAuthenticator, DEFAULT_MAX_AGE_MS};
pub use clock::{Clock, FixedClock, SystemClock};
