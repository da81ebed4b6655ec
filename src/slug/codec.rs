//! Identifier ↔ slug mapping.
//!
//! A slug is 12 characters drawn from `[a-zA-Z0-9]`, derived from an id
//! and a secret with twelve rounds of `multi_round`. There is no inverse:
//! going from a slug back to an id means regenerating the slug for each
//! candidate id until one matches.

use tracing::debug;

use crate::crypto::{multi_round, multi_round_each};

/// Characters a slug is built from, in index order.
pub const SLUG_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in every slug.
pub const SLUG_LENGTH: usize = 12;

/// Derive the public slug for `id`.
///
/// The same `(id, secret)` pair always produces the same slug. Empty ids
/// and secrets are accepted.
pub fn generate_slug(id: &str, secret: &str) -> String {
    multi_round(secret, id, SLUG_LENGTH)
        .into_iter()
        .map(|word| char::from(slug_char(word)))
        .collect()
}

/// Check that `slug` is the slug of `id` under `secret`.
///
/// Compares character by character as the rounds are computed and
/// stops at the first mismatch. Nothing is allocated.
pub fn verify_slug(slug: &str, id: &str, secret: &str) -> bool {
    let expected = slug.as_bytes();
    expected.len() == SLUG_LENGTH
        && multi_round_each(secret, id, SLUG_LENGTH, |round, word| {
            slug_char(word) == expected[round]
        })
}

/// Return the first candidate whose slug equals `slug`.
///
/// This is a linear scan; nothing is cached between calls and nothing
/// is allocated per candidate. A slug that fails `is_valid_slug_format`
/// cannot match and returns `None` without scanning.
pub fn find_id_by_slug<'a, S: AsRef<str>>(
    slug: &str,
    candidates: &'a [S],
    secret: &str,
) -> Option<&'a str> {
    let found = if is_valid_slug_format(slug) {
        candidates
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|id| verify_slug(slug, id, secret))
    } else {
        None
    };

    debug!(
        candidates = candidates.len(),
        found = found.is_some(),
        "reverse slug lookup"
    );
    found
}

fn slug_char(word: u32) -> u8 {
    SLUG_ALPHABET[(word % SLUG_ALPHABET.len() as u32) as usize]
}

/// Syntactic check: exactly 12 characters, all from the slug alphabet.
///
/// Needs no secret, so callers can reject garbage before a reverse lookup.
pub fn is_valid_slug_format(s: &str) -> bool {
    s.len() == SLUG_LENGTH && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-slug-secret";

    #[test]
    fn alphabet_is_lower_upper_digits() {
        assert_eq!(SLUG_ALPHABET[0], b'a');
        assert_eq!(SLUG_ALPHABET[25], b'z');
        assert_eq!(SLUG_ALPHABET[26], b'A');
        assert_eq!(SLUG_ALPHABET[51], b'Z');
        assert_eq!(SLUG_ALPHABET[52], b'0');
        assert_eq!(SLUG_ALPHABET[61], b'9');
        assert!(SLUG_ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn slug_characters_follow_round_words() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let expected: String = multi_round(SECRET, id, SLUG_LENGTH)
            .iter()
            .map(|w| SLUG_ALPHABET[(w % 62) as usize] as char)
            .collect();
        assert_eq!(generate_slug(id, SECRET), expected);
    }

    #[test]
    fn empty_id_and_secret_give_seed_slug() {
        // Rounds over an empty string return their seeds: 5381 + 33r.
        let expected: String = (0..12u32)
            .map(|r| SLUG_ALPHABET[((5381 + 33 * r) % 62) as usize] as char)
            .collect();
        assert_eq!(generate_slug("", ""), expected);
        assert!(is_valid_slug_format(&expected));
    }

    #[test]
    fn verify_rejects_other_id() {
        let slug = generate_slug("a", SECRET);
        assert!(verify_slug(&slug, "a", SECRET));
        assert!(!verify_slug(&slug, "b", SECRET));
    }

    #[test]
    fn verify_agrees_with_generate() {
        for n in 0..200 {
            let id = format!("quote-{n}");
            let slug = generate_slug(&id, SECRET);
            assert!(verify_slug(&slug, &id, SECRET));
            assert!(!verify_slug(&slug, &id, "other-secret"));
        }
    }

    #[test]
    fn verify_rejects_wrong_length() {
        let slug = generate_slug("a", SECRET);
        assert!(!verify_slug(&slug[..11], "a", SECRET));
        assert!(!verify_slug(&format!("{slug}x"), "a", SECRET));
        assert!(!verify_slug("", "a", SECRET));
    }

    #[test]
    fn verify_rejects_last_character_changed() {
        let slug = generate_slug("a", SECRET);
        let last = if slug.ends_with('a') { 'b' } else { 'a' };
        let altered = format!("{}{last}", &slug[..11]);
        assert!(!verify_slug(&altered, "a", SECRET));
    }

    #[test]
    fn find_skips_malformed_slug() {
        let ids = vec!["x".to_string(), "y".to_string()];
        assert_eq!(find_id_by_slug("not-a-slug!", &ids, SECRET), None);
    }

    #[test]
    fn find_returns_first_match() {
        let ids = vec!["x".to_string(), "y".to_string(), "y".to_string()];
        let slug = generate_slug("y", SECRET);
        let found = find_id_by_slug(&slug, &ids, SECRET).unwrap();
        assert!(std::ptr::eq(found, ids[1].as_str()));
    }

    #[test]
    fn find_in_empty_list_is_none() {
        let ids: [&str; 0] = [];
        assert_eq!(find_id_by_slug("abcdefghijkl", &ids, SECRET), None);
    }

    #[test]
    fn format_check() {
        assert!(is_valid_slug_format("aB3dE5gH7jK9"));
        assert!(!is_valid_slug_format(""));
        assert!(!is_valid_slug_format("aB3dE5gH7jK"));
        assert!(!is_valid_slug_format("aB3dE5gH7jK9x"));
        assert!(!is_valid_slug_format("aB3dE5-H7jK9"));
        assert!(!is_valid_slug_format("aB3dE5 H7jK9"));
        // 12 bytes but non-ASCII.
        assert!(!is_valid_slug_format("aB3dE5gH7jé"));
    }
}
