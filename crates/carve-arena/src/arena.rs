//! The arena engine: placement, reset, release, and raw export.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use carve_core::layout;

use crate::error::{ArenaError, ExportError};
use crate::handle::Slot;
use crate::raw::RawRegion;

/// Counter for unique arena instance IDs.
static ARENA_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A fixed-capacity typed arena.
///
/// Owns one contiguous, word-aligned byte region. Each placement
/// reserves a slot of `slot_size::<T>()` bytes, carved from the **top**
/// of the region downward: the first placement occupies the
/// highest-address slot, the second the next slot down, and so on. The
/// fill order is part of the contract — it fixes the exact byte layout
/// that [`Arena::export_bytes`] emits.
///
/// There is no per-slot deallocation. [`Arena::reset`] reclaims the
/// whole region in one step (without zeroing it) and
/// [`Arena::release`] returns it to the host allocator; both bump the
/// arena's epoch, invalidating every outstanding [`Slot`].
///
/// Values placed in the arena are never dropped.
///
/// # Examples
///
/// ```
/// use carve_arena::Arena;
/// use carve_core::layout::required_bytes;
///
/// let mut arena = Arena::with_capacity(required_bytes::<u32>(2));
/// let a = arena.place_with(|v: &mut u32| *v = 7).unwrap();
/// let b = arena.place::<u32>().unwrap();
/// assert_eq!(*arena.get(a).unwrap(), 7);
/// assert_eq!(*arena.get(b).unwrap(), 0);
/// assert_eq!(arena.remaining(), 0);
///
/// arena.reset();
/// assert!(arena.get(a).is_err()); // stale after reset
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    region: RawRegion,
    used: usize,
    epoch: u32,
    id: u64,
}

impl Arena {
    /// Allocate an arena with exactly `capacity` bytes of backing store.
    ///
    /// The region is zero-initialised and word-aligned. Capacities that
    /// are not word multiples are accepted, but placements whose slot
    /// address cannot satisfy the type's alignment will fail with
    /// [`ArenaError::AlignmentUnsupported`]; capacities computed via
    /// [`layout::required_bytes`] never hit this.
    ///
    /// Host allocation failure is fatal and not recovered.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            region: RawRegion::allocate(capacity),
            used: 0,
            epoch: 0,
            id: ARENA_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Allocate an arena sized for exactly `count` placements of `T`.
    ///
    /// Equivalent to `Arena::with_capacity(required_bytes::<T>(count))`.
    pub fn sized_for<T>(count: usize) -> Self {
        Self::with_capacity(layout::required_bytes::<T>(count))
    }

    /// Place `T::default()` into the next slot down from the top of the
    /// unused span and return a handle to it.
    ///
    /// The slot's bytes are zeroed before the value is written; drop
    /// glue never runs for whatever previously occupied them.
    ///
    /// # Errors
    ///
    /// [`ArenaError::CapacityExhausted`] if the slot does not fit in the
    /// remaining capacity (always, after release). A failed placement
    /// leaves the arena unchanged.
    /// [`ArenaError::AlignmentUnsupported`] if the slot address cannot
    /// satisfy `align_of::<T>()` (non-word-multiple capacity, or a type
    /// aligned wider than the word).
    pub fn place<T: Default>(&mut self) -> Result<Slot<T>, ArenaError> {
        let slot_size = layout::slot_size::<T>();
        let remaining = self.remaining();
        if slot_size > remaining {
            return Err(ArenaError::CapacityExhausted {
                requested: slot_size,
                remaining,
            });
        }
        let offset = self.region.capacity() - self.used - slot_size;
        let available = self.region.alignment_at(offset);
        if available < std::mem::align_of::<T>() {
            return Err(ArenaError::AlignmentUnsupported {
                required: std::mem::align_of::<T>(),
                available,
            });
        }
        self.region.place_default::<T>(offset, slot_size);
        self.used += slot_size;
        Ok(Slot::new(self.id, self.epoch, offset))
    }

    /// Place `T::default()`, then apply `init` to the fresh value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Arena::place`].
    pub fn place_with<T: Default>(
        &mut self,
        init: impl FnOnce(&mut T),
    ) -> Result<Slot<T>, ArenaError> {
        let slot = self.place::<T>()?;
        init(self.region.typed_mut(slot.offset));
        Ok(slot)
    }

    /// Resolve a handle to a shared reference.
    ///
    /// # Errors
    ///
    /// [`ArenaError::StaleSlot`] if the arena has been reset or released
    /// since the handle was minted; [`ArenaError::ForeignSlot`] if the
    /// handle was minted by a different arena.
    pub fn get<T>(&self, slot: Slot<T>) -> Result<&T, ArenaError> {
        self.check_slot(&slot)?;
        Ok(self.region.typed_ref(slot.offset))
    }

    /// Resolve a handle to a mutable reference.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Arena::get`].
    pub fn get_mut<T>(&mut self, slot: Slot<T>) -> Result<&mut T, ArenaError> {
        self.check_slot(&slot)?;
        Ok(self.region.typed_mut(slot.offset))
    }

    /// Re-stamp a stale handle with the arena's current epoch, opting
    /// back into classic bump-arena aliasing: the re-bound handle
    /// observes whatever value now occupies the slot's bytes.
    ///
    /// # Safety
    ///
    /// The slot's byte span must currently hold a live value of `T`
    /// placed since the most recent reset — typically because the same
    /// placement sequence was replayed into the same offsets. Re-binding
    /// a slot whose bytes now belong to a different type (or to no
    /// placement at all) makes subsequent [`Arena::get`] calls read
    /// garbage as `T`, which is undefined behaviour for types with
    /// invariants.
    #[allow(unsafe_code)]
    pub unsafe fn rebind<T>(&self, slot: Slot<T>) -> Slot<T> {
        Slot::new(self.id, self.epoch, slot.offset)
    }

    /// Reclaim the entire region in one step.
    ///
    /// Sets `used` to 0 and bumps the epoch; the region's contents are
    /// left untouched (no zeroing). All outstanding handles become
    /// stale. The next placement reuses the topmost slot, silently
    /// overwriting whatever lived there.
    pub fn reset(&mut self) {
        self.used = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Return the backing region to the host allocator.
    ///
    /// After release, `capacity` and `used` are 0, every placement
    /// fails with [`ArenaError::CapacityExhausted`], and
    /// [`Arena::export_bytes`] writes nothing. Idempotent; also runs on
    /// drop, so explicit release is only needed to reclaim the memory
    /// early.
    pub fn release(&mut self) {
        self.region.release();
        self.used = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Write the occupied span — the `used` bytes from the low end of
    /// the occupied region up through the region's top — verbatim to
    /// `sink`, returning the number of bytes written (always `used`).
    ///
    /// Because slots fill top-down, the span starts with the most
    /// recent placement and ends with the first. Bytes are exported
    /// exactly as they sit in memory; multi-byte values therefore
    /// appear little-endian in the output on every target this crate
    /// supports.
    ///
    /// # Errors
    ///
    /// [`ExportError::Io`] if the sink rejects a write; the export is
    /// not retried and may have partially written.
    pub fn export_bytes<W: Write>(&self, sink: &mut W) -> Result<usize, ExportError> {
        let span = self
            .region
            .bytes(self.region.capacity() - self.used, self.used);
        sink.write_all(span)?;
        Ok(span.len())
    }

    /// Bytes currently occupied by placements.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Total capacity of the backing region (0 after release).
    pub fn capacity(&self) -> usize {
        self.region.capacity()
    }

    /// Bytes still unoccupied.
    pub fn remaining(&self) -> usize {
        self.region.capacity() - self.used
    }

    /// Whether no placements are live.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// The arena's current epoch. Starts at 0, bumped by every reset
    /// and release.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    fn check_slot<T>(&self, slot: &Slot<T>) -> Result<(), ArenaError> {
        if slot.arena != self.id {
            return Err(ArenaError::ForeignSlot {
                slot_arena: slot.arena,
                arena: self.id,
            });
        }
        if slot.epoch != self.epoch {
            return Err(ArenaError::StaleSlot {
                slot_epoch: slot.epoch,
                arena_epoch: self.epoch,
            });
        }
        Ok(())
    }
}
