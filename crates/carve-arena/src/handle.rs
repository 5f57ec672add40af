//! Typed slot handles.
//!
//! A [`Slot<T>`] encodes the physical location of one placed value: the
//! minting arena's instance ID, the epoch the placement happened in, and
//! the byte offset of the slot within the region. It is scoped to both:
//! the arena checks instance and epoch on every resolution, so a handle
//! that outlives a reset or release is a typed error, not a dangling
//! reference.

use std::fmt;
use std::marker::PhantomData;

/// Non-owning handle to a value placed in an arena.
///
/// Handles are `Copy` and cheap to pass around, but carry no pointer —
/// they resolve only through [`Arena::get`](crate::Arena::get) /
/// [`Arena::get_mut`](crate::Arena::get_mut) on the arena that minted
/// them, and only until that arena's next reset or release.
#[must_use]
pub struct Slot<T> {
    /// Instance ID of the minting arena.
    pub(crate) arena: u64,
    /// Arena epoch when this placement was made.
    pub(crate) epoch: u32,
    /// Byte offset of the slot start within the region.
    pub(crate) offset: usize,
    pub(crate) _value: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    pub(crate) fn new(arena: u64, epoch: u32, offset: usize) -> Self {
        Self {
            arena,
            epoch,
            offset,
            _value: PhantomData,
        }
    }

    /// The epoch this handle was minted under.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Byte offset of the slot start within the arena's region.
    ///
    /// Offsets count from the low end of the region; placements fill
    /// from the high end, so the first placement has the largest offset.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

// Manual impls: the derives would bound on `T`, but a handle is Copy
// regardless of what it points at.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena && self.epoch == other.epoch && self.offset == other.offset
    }
}

impl<T> Eq for Slot<T> {}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("arena", &self.arena)
            .field("epoch", &self.epoch)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slot(arena={}, epoch={}, off={})",
            self.arena, self.epoch, self.offset
        )
    }
}
