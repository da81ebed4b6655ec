//! Stateless admin tokens.
//!
//! A token is `<issued-at-ms>.<signature>` where the signature is
//! `dual_hash_signature(issued-at-ms, secret)`. Nothing is stored on the
//! server: a token is valid while it is younger than the maximum age and
//! its signature recomputes. Rotating the secret invalidates every
//! outstanding token at once.

use std::fmt;

use tracing::debug;

use super::clock::{Clock, SystemClock};
use crate::crypto::{dual_hash_signature, PlainComparator, SignatureComparator};

/// Default maximum token age: 4 hours, in milliseconds.
pub const DEFAULT_MAX_AGE_MS: i64 = 4 * 60 * 60 * 1000;

/// Separator between the timestamp and the signature.
const TOKEN_SEPARATOR: char = '.';

/// Issues and verifies tokens under a fixed policy.
///
/// The secret is passed on every call rather than held here, so one
/// authenticator can serve several secrets.
pub struct TokenAuthenticator {
    max_age_ms: i64,
    comparator: Box<dyn SignatureComparator>,
    clock: Box<dyn Clock>,
}

impl Default for TokenAuthenticator {
    fn default() -> Self {
        Self {
            max_age_ms: DEFAULT_MAX_AGE_MS,
            comparator: Box::new(PlainComparator),
            clock: Box::new(SystemClock),
        }
    }
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("max_age_ms", &self.max_age_ms)
            .finish_non_exhaustive()
    }
}

impl TokenAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the maximum token age.
    pub fn with_max_age_ms(mut self, max_age_ms: i64) -> Self {
        self.max_age_ms = max_age_ms;
        self
    }

    /// Replace the signature comparison step.
    pub fn with_comparator(mut self, comparator: impl SignatureComparator + 'static) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn max_age_ms(&self) -> i64 {
        self.max_age_ms
    }

    /// Issue a token stamped with the current time.
    pub fn issue(&self, secret: &str) -> String {
        let issued_at = self.clock.now_millis().to_string();
        let signature = dual_hash_signature(&issued_at, secret);
        format!("{issued_at}{TOKEN_SEPARATOR}{signature}")
    }

    /// Check a token. Any malformed, expired or forged token is `false`.
    ///
    /// The token splits at its first `.`; everything after it is the
    /// signature. Tokens stamped in the future are not rejected.
    pub fn verify(&self, token: &str, secret: &str) -> bool {
        let Some((timestamp, signature)) = token.split_once(TOKEN_SEPARATOR) else {
            debug!(reason = "no separator", "token rejected");
            return false;
        };

        let Ok(issued_at) = timestamp.parse::<i64>() else {
            debug!(reason = "bad timestamp", "token rejected");
            return false;
        };

        let age = self.clock.now_millis().saturating_sub(issued_at);
        if age > self.max_age_ms {
            debug!(reason = "expired", age_ms = age, "token rejected");
            return false;
        }

        let expected = dual_hash_signature(timestamp, secret);
        if !self.comparator.matches(&expected, signature) {
            debug!(reason = "signature mismatch", "token rejected");
            return false;
        }

        true
    }
}

/// Issue a token with the default 4-hour policy.
pub fn issue_token(secret: &str) -> String {
    TokenAuthenticator::default().issue(secret)
}

/// Verify a token with the default 4-hour policy.
pub fn verify_token(token: &str, secret: &str) -> bool {
    TokenAuthenticator::default().verify(token, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ConstantTimeComparator;
    use crate::token::FixedClock;

    const SECRET: &str = "admin-secret";
    const NOW: i64 = 1_700_000_000_000;

    fn at(now: i64) -> TokenAuthenticator {
        TokenAuthenticator::new().with_clock(FixedClock(now))
    }

    #[test]
    fn issued_token_has_timestamp_and_signature() {
        let token = at(NOW).issue(SECRET);
        assert_eq!(
            token,
            format!("{NOW}.{}", dual_hash_signature(&NOW.to_string(), SECRET))
        );
    }

    #[test]
    fn exactly_max_age_is_still_valid() {
        let token = at(NOW).issue(SECRET);
        assert!(at(NOW + DEFAULT_MAX_AGE_MS).verify(&token, SECRET));
        assert!(!at(NOW + DEFAULT_MAX_AGE_MS + 1).verify(&token, SECRET));
    }

    #[test]
    fn future_timestamp_is_accepted() {
        let token = at(NOW + 60_000).issue(SECRET);
        assert!(at(NOW).verify(&token, SECRET));
    }

    #[test]
    fn custom_max_age() {
        let token = at(NOW).issue(SECRET);
        let short = at(NOW + 1_001).with_max_age_ms(1_000);
        assert!(!short.verify(&token, SECRET));
        assert_eq!(short.max_age_ms(), 1_000);
    }

    #[test]
    fn extra_separator_is_part_of_signature() {
        let token = at(NOW).issue(SECRET);
        assert!(!at(NOW).verify(&format!("{token}.extra"), SECRET));
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let sig = dual_hash_signature(&i64::MIN.to_string(), SECRET);
        let token = format!("{}.{sig}", i64::MIN);
        assert!(!at(i64::MAX).verify(&token, SECRET));
    }

    #[test]
    fn constant_time_comparator_agrees() {
        let auth = at(NOW).with_comparator(ConstantTimeComparator);
        let token = auth.issue(SECRET);
        assert!(auth.verify(&token, SECRET));
        assert!(!auth.verify(&token, "other-secret"));
    }

    #[test]
    fn debug_output_lists_policy_only() {
        let rendered = format!("{:?}", at(NOW));
        assert!(rendered.contains("max_age_ms"));
    }
}
