//! Arena-specific error types.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from arena placement and handle resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A placement would exceed the arena's remaining capacity.
    ///
    /// The arena never grows; the caller may construct a larger arena
    /// and migrate. A failed placement leaves the arena unchanged.
    CapacityExhausted {
        /// Slot bytes the placement needed.
        requested: usize,
        /// Bytes still unoccupied (0 after release).
        remaining: usize,
    },
    /// A `Slot` minted before the most recent reset or release.
    StaleSlot {
        /// Epoch stamped into the handle.
        slot_epoch: u32,
        /// The arena's current epoch.
        arena_epoch: u32,
    },
    /// A `Slot` minted by a different arena.
    ForeignSlot {
        /// Instance ID of the arena that minted the handle.
        slot_arena: u64,
        /// Instance ID of the arena asked to resolve it.
        arena: u64,
    },
    /// The slot start address cannot satisfy the type's alignment.
    ///
    /// Only reachable with a capacity that is not a word multiple, or
    /// with a type whose alignment exceeds the word size (e.g. `u128`
    /// on targets where its ABI alignment is 16).
    AlignmentUnsupported {
        /// Alignment the type requires.
        required: usize,
        /// Alignment the slot address actually has.
        available: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exhausted: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::StaleSlot {
                slot_epoch,
                arena_epoch,
            } => {
                write!(
                    f,
                    "stale slot: minted at epoch {slot_epoch}, arena is at epoch {arena_epoch}"
                )
            }
            Self::ForeignSlot { slot_arena, arena } => {
                write!(
                    f,
                    "foreign slot: minted by arena {slot_arena}, resolved against arena {arena}"
                )
            }
            Self::AlignmentUnsupported {
                required,
                available,
            } => {
                write!(
                    f,
                    "slot alignment unsupported: type requires {required}, slot address provides {available}"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Errors from [`Arena::export_bytes`](crate::Arena::export_bytes).
#[derive(Debug)]
pub enum ExportError {
    /// The sink rejected a write. Not retried.
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "export sink write failed: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
