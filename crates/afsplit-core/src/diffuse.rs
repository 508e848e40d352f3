//! Hash-in-counter-mode diffusion.
//!
//! This is the primitive that gives partial stripe destruction its
//! disproportionate effect: every digest-sized segment of the output
//! depends on a distinct counter and a distinct slice of the input, so a
//! single flipped input byte rewrites its whole segment unpredictably and
//! the chained use in split/merge spreads that change across the entire
//! accumulator.

use sha2::digest::{Digest, FixedOutputReset};

/// Re-mix `block` in place with hash `H` in counter mode.
///
/// The block is processed in segments of `H`'s digest size. Segment `i` is
/// replaced by `H(be32(i) || segment_i)`, truncated to the segment length
/// when the block is not a whole number of digests. An empty block is
/// returned untouched without invoking the hash.
///
/// Deterministic: the same block and hash always produce the same output.
/// There are no failure modes; any block length is valid.
pub fn diffuse<H: Digest + FixedOutputReset>(block: &mut [u8]) {
    if block.is_empty() {
        return;
    }

    let mut hash = H::new();

    for (counter, segment) in block.chunks_mut(<H as Digest>::output_size()).enumerate() {
        Digest::update(&mut hash, (counter as u32).to_be_bytes());
        Digest::update(&mut hash, &segment[..]);
        let digest = hash.finalize_reset();
        segment.copy_from_slice(&digest[..segment.len()]);
    }
}

#[cfg(test)]
mod tests {
    use sha2::Sha256;

    use super::*;

    #[test]
    fn empty_block_is_untouched() {
        let mut block: [u8; 0] = [];
        diffuse::<Sha256>(&mut block);
    }

    #[test]
    fn output_length_matches_input_length() {
        for len in [1, 5, 31, 32, 33, 64, 100] {
            let mut block = vec![0xA5u8; len];
            diffuse::<Sha256>(&mut block);
            assert_eq!(block.len(), len);
        }
    }

    #[test]
    fn diffuse_is_deterministic() {
        let mut first = vec![0x17u8; 100];
        let mut second = first.clone();

        diffuse::<Sha256>(&mut first);
        diffuse::<Sha256>(&mut second);

        assert_eq!(first, second, "same input must produce same output");
    }

    #[test]
    fn full_segment_matches_counter_mode_construction() {
        let mut block: Vec<u8> = (0u8..64).collect();
        let original = block.clone();
        diffuse::<Sha256>(&mut block);

        for (counter, segment) in original.chunks(32).enumerate() {
            let mut hash = Sha256::new();
            hash.update((counter as u32).to_be_bytes());
            hash.update(segment);
            let expected = hash.finalize();
            assert_eq!(&block[counter * 32..(counter + 1) * 32], &expected[..]);
        }
    }

    #[test]
    fn short_final_segment_is_truncated_digest() {
        let mut block = vec![0x42u8; 40];
        diffuse::<Sha256>(&mut block);

        let mut hash = Sha256::new();
        hash.update(1u32.to_be_bytes());
        hash.update([0x42u8; 8]);
        let expected = hash.finalize();
        assert_eq!(&block[32..], &expected[..8]);
    }

    #[test]
    fn block_shorter_than_digest_is_truncated_digest() {
        let mut block = *b"hello";
        diffuse::<Sha256>(&mut block);

        let mut hash = Sha256::new();
        hash.update(0u32.to_be_bytes());
        hash.update(b"hello");
        let expected = hash.finalize();
        assert_eq!(&block[..], &expected[..5]);
    }

    #[test]
    fn one_byte_change_flips_many_bytes_in_its_segment() {
        let mut block = vec![0u8; 32];
        let mut tampered = block.clone();
        tampered[0] ^= 0x01;

        diffuse::<Sha256>(&mut block);
        diffuse::<Sha256>(&mut tampered);

        let differing = block.iter().zip(&tampered).filter(|(a, b)| a != b).count();
        assert!(differing > 16, "expected avalanche, only {differing}/32 bytes differ");
    }

    #[test]
    fn segments_are_position_dependent() {
        // Two identical 32-byte halves must not diffuse to identical
        // output because the counter binds each segment to its offset.
        let mut block = vec![0x33u8; 64];
        diffuse::<Sha256>(&mut block);
        assert_ne!(&block[..32], &block[32..]);
    }
}
