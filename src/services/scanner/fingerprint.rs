//! Catalog-compatible content hashing.
//!
//! The constants and byte order below are the third-party catalog's
//! published fingerprinting scheme. Fingerprints computed here are
//! compared against values the catalog computed on its side, so any
//! deviation is a correctness bug, not a style choice.

use super::normalizer;

const MULTIPLIER: u32 = 0x5bd1_e995;
const SEED: u32 = 1;

/// Hash one content buffer.
///
/// The scheme is whitespace-agnostic by definition: whitespace bytes are
/// excluded both from the length term and from the accumulated words, so
/// pre-normalized and raw buffers of the same significant content hash
/// identically.
pub fn hash_buffer(bytes: &[u8]) -> u32 {
    let length = bytes
        .iter()
        .filter(|b| !normalizer::is_whitespace(**b))
        .count() as u32;

    let mut hash = SEED ^ length;
    let mut word: u32 = 0;
    let mut shift: u32 = 0;

    for byte in bytes.iter().filter(|b| !normalizer::is_whitespace(**b)) {
        word |= u32::from(*byte) << shift;
        shift += 8;
        if shift == 32 {
            let mixed = word.wrapping_mul(MULTIPLIER);
            let mixed = (mixed ^ (mixed >> 24)).wrapping_mul(MULTIPLIER);
            hash = hash.wrapping_mul(MULTIPLIER) ^ mixed;
            word = 0;
            shift = 0;
        }
    }

    if shift > 0 {
        hash = (hash ^ word).wrapping_mul(MULTIPLIER);
    }

    let hash = (hash ^ (hash >> 13)).wrapping_mul(MULTIPLIER);
    hash ^ (hash >> 15)
}

/// Combine an already-sorted sequence of file hashes into the folder
/// hash: the decimal renderings are concatenated and hashed as one
/// buffer. Ordering policy belongs to the caller; the hasher itself has
/// none. The empty sequence is well-defined (the hash of the empty
/// buffer).
pub fn hash_folder(sorted_hashes: &[u32]) -> u32 {
    let mut joined = String::new();
    for hash in sorted_hashes {
        joined.push_str(&hash.to_string());
    }
    hash_buffer(joined.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed point of the scheme: seed mixed with a zero length term.
    const EMPTY_HASH: u32 = 0x5bd1_5e36;

    #[test]
    fn test_empty_buffer_hash_is_fixed() {
        assert_eq!(hash_buffer(b""), EMPTY_HASH);
    }

    #[test]
    fn test_whitespace_only_buffer_hashes_like_empty() {
        assert_eq!(hash_buffer(b" \t\r\n  "), EMPTY_HASH);
    }

    #[test]
    fn test_whitespace_never_contributes() {
        assert_eq!(hash_buffer(b"local x = 1"), hash_buffer(b"localx=1"));
        assert_eq!(hash_buffer(b"a\tb\r\nc"), hash_buffer(b"abc"));
    }

    #[test]
    fn test_deterministic() {
        let bytes = b"SlashCmdList[\"FOO\"] = function() end";
        assert_eq!(hash_buffer(bytes), hash_buffer(bytes));
    }

    #[test]
    fn test_content_changes_hash() {
        assert_ne!(hash_buffer(b"localx=1"), hash_buffer(b"localx=2"));
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(hash_buffer(b"ab"), hash_buffer(b"ba"));
    }

    #[test]
    fn test_folder_hash_of_empty_set() {
        assert_eq!(hash_folder(&[]), EMPTY_HASH);
    }

    #[test]
    fn test_folder_hash_is_decimal_concatenation() {
        assert_eq!(hash_folder(&[1, 23]), hash_buffer(b"123"));
        assert_eq!(hash_folder(&[4060485919]), hash_buffer(b"4060485919"));
    }

    #[test]
    fn test_folder_hash_depends_on_members() {
        assert_ne!(hash_folder(&[1, 2]), hash_folder(&[1, 3]));
    }
}
