//! Fixed-capacity typed arena allocation for the Carve workspace.
//!
//! An [`Arena`] owns one contiguous, word-aligned byte region of fixed
//! capacity. Typed objects are placed into word-granular slots carved
//! from the **top** of the region downward; the whole region is
//! reclaimed in one step by [`Arena::reset`] and the occupied span can
//! be exported verbatim with [`Arena::export_bytes`]. Region sizes are
//! computed up front with `carve-core`'s layout functions, so an arena
//! sized for `n` objects of a type is consumed exactly by `n`
//! placements.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── RawRegion (raw.rs — the only unsafe module)
//! │   └── word-aligned, zero-initialised allocation of `capacity` bytes
//! ├── used: high-water byte counter (slots fill top-down)
//! └── epoch: bumped on reset/release; stamped into every Slot<T>
//! ```
//!
//! # Handle safety
//!
//! [`Slot<T>`] handles are epoch- and arena-scoped: resolving a handle
//! after the arena has been reset or released yields a typed
//! [`ArenaError::StaleSlot`] error, and resolving it against a different
//! arena yields [`ArenaError::ForeignSlot`]. The aliasing behaviour of a
//! classic bump arena (a stale handle silently observing the slot's new
//! occupant) is available only through the `unsafe`
//! [`Arena::rebind`] escape hatch.
//!
//! # Drop glue
//!
//! Values placed in an arena are **never dropped**. Reset and release
//! reclaim the bytes only; heap-owning payloads such as `String` are
//! leaked unless the caller takes them back out first.
//!
//! All `unsafe` code is confined to `raw.rs`, each block carrying a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod error;
pub mod handle;
mod raw;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use error::{ArenaError, ExportError};
pub use handle::Slot;
