//! Carve: typed memory arenas with exact sizing and byte-exact export.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Carve sub-crates. For most users, adding `carve` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use carve::prelude::*;
//!
//! // Size a region for exactly three u64 values, then fill it.
//! let mut arena = Arena::with_capacity(required_bytes::<u64>(3));
//! let mut handles = Vec::new();
//! for i in 0..3u64 {
//!     handles.push(arena.place_with(|v: &mut u64| *v = i).unwrap());
//! }
//! assert_eq!(arena.remaining(), 0);
//! assert_eq!(*arena.get(handles[1]).unwrap(), 1);
//!
//! // Export the occupied span: placements fill top-down, so the most
//! // recent value leads the dump.
//! let mut dump = Vec::new();
//! arena.export_bytes(&mut dump).unwrap();
//! assert_eq!(dump.len(), required_bytes::<u64>(3));
//!
//! // Reclaim everything in one step; old handles turn stale.
//! arena.reset();
//! assert!(arena.get(handles[0]).is_err());
//! assert_eq!(arena.used(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `carve-arena` | `Arena`, `Slot`, error types |
//! | [`layout`] | `carve-core` | word-granular slot sizing |
//! | [`bitset`] | `carve-core` | `BitSet` membership set |
//! | [`pool`] | `carve-pool` | append-only `Buf`, keyed `Pool` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena storage and handles (`carve-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::Slot`] from this
/// module — they are also available in the [`prelude`].
pub use carve_arena as arena;

/// Append-only buffer and key-indexed pool (`carve-pool`).
pub use carve_pool as pool;

/// Slot-layout arithmetic (`carve-core::layout`).
///
/// The sizing functions are pure `const fn`s: compute a region size
/// with [`layout::required_bytes`] before constructing an arena.
pub use carve_core::layout;

/// Compact bit-vector membership set (`carve-core::bitset`).
pub use carve_core::bitset;

/// Common imports for typical Carve usage.
///
/// ```rust
/// use carve::prelude::*;
/// ```
pub mod prelude {
    // Arena and handles
    pub use carve_arena::{Arena, ArenaError, ExportError, Slot};

    // Sizing
    pub use carve_core::layout::{required_bytes, slot_size, WORD_SIZE};

    // Collaborators
    pub use carve_core::bitset::BitSet;
    pub use carve_pool::{Buf, Pool};
}
