//! The todo.txt priority codec.
//!
//! Priorities are letter sequences ("A".."Z", "AA", ...) read as bijective
//! base-26 numerals: digits 1..26 map to 'A'..'Z' with no zero digit, most
//! significant digit first. "A" is rank 1 and the highest priority; rank 0
//! is the sentinel for "unprioritized" and is never a real rank.

/// Whether every character of `s`, case-folded, is a letter A-Z.
///
/// The empty string passes; callers dealing with `(X)` priority tokens
/// enforce non-emptiness and bracketing themselves.
pub fn is_priority_string(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Decodes a letter sequence into its rank. Case-insensitive; any character
/// outside A-Z invalidates the whole string and yields 0.
pub fn decode_priority(s: &str) -> u32 {
    let mut total: u32 = 0;

    for c in s.chars() {
        if !c.is_ascii_alphabetic() {
            return 0;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        total = total.saturating_mul(26).saturating_add(digit);
    }

    total
}

/// Encodes a positive rank as its canonical letter sequence. Rank 0 yields
/// the empty string.
pub fn encode_priority(rank: u32) -> String {
    let mut quotient = rank;
    let mut letters = Vec::new();

    while quotient > 0 {
        let mut remainder = quotient % 26;
        quotient /= 26;
        if remainder == 0 {
            remainder = 26;
            quotient -= 1;
        }
        letters.push((b'A' + remainder as u8 - 1) as char);
    }

    letters.iter().rev().collect()
}
