//! Keyed DJB2-style hash primitives.
//!
//! Two algorithms share the `h = h * 33 + code` recurrence under `u32`
//! wraparound:
//! - `multi_round` rotates `secret || payload || secret` once per round
//!   and emits one word per round (used for slugs).
//! - `dual_hash_signature` scans `secret:payload:secret` once with two
//!   differently seeded accumulators and renders both in base 36 (used
//!   for admin tokens).
//!
//! Character codes are UTF-16 code units so that values match slugs and
//! tokens issued by the existing web deployment.
//!
//! These are not MACs. They hide enumerable ids from casual inspection
//! and nothing more.

/// Seed of the classic DJB2 hash.
const DJB2_SEED: u32 = 5381;

/// Seed of the second accumulator in `dual_hash_signature`.
const SECOND_SEED: u32 = 52711;

/// Per-round seed offset in `multi_round`.
const ROUND_SEED_STEP: u32 = 33;

/// Separator placed between secret and payload in signatures.
const SIGNATURE_SEPARATOR: &str = ":";

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One step of the recurrence: `hash * 33 + code`, wrapping at 2^32.
#[inline]
fn step(hash: u32, code: u16) -> u32 {
    (hash << 5)
        .wrapping_add(hash)
        .wrapping_add(u32::from(code))
}

/// Expand `secret || payload || secret` into `rounds` pseudorandom words.
///
/// Round `r` starts from `5381 + 33 * r` and reads the combined string
/// rotated left by `r` positions, so every round sees the same bytes in
/// a different order.
pub fn multi_round(secret: &str, payload: &str, rounds: usize) -> Vec<u32> {
    let mut words = Vec::with_capacity(rounds);
    multi_round_each(secret, payload, rounds, |_, word| {
        words.push(word);
        true
    });
    words
}

/// Streaming form of `multi_round` that never allocates.
///
/// Each word is handed to `visit` together with its round index. Returns
/// `false` as soon as `visit` does, without computing later rounds, and
/// `true` once every round has been visited.
pub fn multi_round_each<F>(secret: &str, payload: &str, rounds: usize, mut visit: F) -> bool
where
    F: FnMut(usize, u32) -> bool,
{
    let combined = secret
        .encode_utf16()
        .chain(payload.encode_utf16())
        .chain(secret.encode_utf16());
    let len = combined.clone().count();

    (0..rounds).all(|round| {
        let seed = DJB2_SEED.wrapping_add((round as u32).wrapping_mul(ROUND_SEED_STEP));
        let word = combined
            .clone()
            .cycle()
            .skip(round)
            .take(len)
            .fold(seed, step);
        visit(round, word)
    })
}

/// Sign `payload` with `secret`.
///
/// Returns `base36(h1) + base36(h2)` where both hashes run over
/// `secret:payload:secret`, seeded with 5381 and 52711 respectively.
pub fn dual_hash_signature(payload: &str, secret: &str) -> String {
    let (h1, h2) = secret
        .encode_utf16()
        .chain(SIGNATURE_SEPARATOR.encode_utf16())
        .chain(payload.encode_utf16())
        .chain(SIGNATURE_SEPARATOR.encode_utf16())
        .chain(secret.encode_utf16())
        .fold((DJB2_SEED, SECOND_SEED), |(h1, h2), code| {
            (step(h1, code), step(h2, code))
        });

    let mut signature = to_base36(h1);
    signature.push_str(&to_base36(h2));
    signature
}

/// Render a word in lowercase base 36 (`0` for zero).
pub fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // Only ASCII digits were pushed.
    digits.into_iter().map(char::from).collect()
}
