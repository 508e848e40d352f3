//! Fuzz target for merge on hostile buffers
//!
//! Merge runs against whatever comes back from storage, including buffers
//! that were partially overwritten or never produced by split at all.
//!
//! # Strategy
//!
//! - Completely arbitrary buffers and stripe counts
//! - No relationship between buffer length and stripe count is assumed
//!
//! # Invariants
//!
//! - Zero stripe count is rejected, never computed on
//! - Unaligned buffer length is rejected, never computed on
//! - Every aligned buffer merges into exactly one stripe of output
//! - NEVER panic, regardless of input shape

#![no_main]

use afsplit_core::{SplitError, merge};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sha2::Sha256;

#[derive(Debug, Clone, Arbitrary)]
struct HostileBuffer {
    buffer: Vec<u8>,
    stripes: usize,
}

fuzz_target!(|input: HostileBuffer| {
    let result = merge::<Sha256>(&input.buffer, input.stripes);

    if input.stripes == 0 {
        assert!(matches!(result, Err(SplitError::InvalidStripeCount { stripes: 0 })));
    } else if input.buffer.len() % input.stripes != 0 {
        assert!(matches!(result, Err(SplitError::UnalignedBuffer { .. })));
    } else {
        let merged = result.unwrap();
        assert_eq!(merged.len(), input.buffer.len() / input.stripes);
    }
});
