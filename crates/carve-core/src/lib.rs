//! Core primitives for the Carve arena workspace.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! slot-layout arithmetic used to size arena regions ([`layout`]) and a
//! compact bit-vector membership set over small integer domains
//! ([`bitset`]). Neither depends on the arena itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitset;
pub mod layout;

pub use bitset::{BitIndex, BitSet};
pub use layout::{required_bytes, required_bytes_of, slot_size, slot_size_of, WORD_SIZE};
