//! Benchmark profiles for the Carve arena workspace.
//!
//! Provides pre-sized arena builders shared by the criterion benches so
//! every bench measures the same region shapes.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use carve_arena::Arena;
use carve_core::layout::required_bytes;

/// Number of placements the reference profile is sized for.
pub const REFERENCE_COUNT: usize = 10_000;

/// Build an arena sized for exactly [`REFERENCE_COUNT`] `u64` values.
pub fn reference_arena() -> Arena {
    Arena::with_capacity(required_bytes::<u64>(REFERENCE_COUNT))
}

/// Build an arena sized for [`REFERENCE_COUNT`] instances of a
/// three-word aggregate, approximating record-shaped payloads.
pub fn record_arena() -> Arena {
    Arena::with_capacity(required_bytes::<[usize; 3]>(REFERENCE_COUNT))
}
