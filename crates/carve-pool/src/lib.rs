//! Append-only storage utilities for the Carve workspace.
//!
//! [`Buf`] is a growable, append-only buffer with stable slot indices —
//! values are pushed, never removed. [`Pool`] layers a key table on top
//! of a `Buf`, mapping caller-chosen keys to buffer slots so values can
//! be stored by construction and looked up by key. Neither depends on
//! the arena.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buf;
pub mod pool;

pub use buf::Buf;
pub use pool::Pool;
