use super::PartitionKey;

/// Classic 32-bit string hash: `h = 31 * h + unit`, seeded at 0, wrapping.
///
/// Iterates UTF-16 code units so that text outside the ASCII range hashes to the
/// same value other producers of this key format compute.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hashes `s` and encodes the result as a 4-byte big-endian key.
///
/// Every string-hashing strategy goes through here so identical input always
/// yields identical bytes.
pub fn hash_key(s: &str) -> PartitionKey {
    PartitionKey::from_hash(string_hash(s))
}
