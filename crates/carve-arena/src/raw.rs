//! Low-level region primitives.
//!
//! The only module in the crate allowed to contain `unsafe` code. It
//! owns the arena's backing allocation and performs the checked casts
//! from byte offsets to typed references: every cast is bounds- and
//! alignment-validated before the pointer is formed, and every `unsafe`
//! block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::ptr::NonNull;

use carve_core::layout::WORD_SIZE;

/// Exclusively-owned, word-aligned byte region.
///
/// Allocated zeroed at creation and freed on [`RawRegion::release`] or
/// drop. A zero-capacity region performs no allocation and uses a
/// dangling (but word-aligned) base pointer.
pub(crate) struct RawRegion {
    base: NonNull<u8>,
    capacity: usize,
}

impl RawRegion {
    /// Allocate a zeroed region of exactly `capacity` bytes.
    ///
    /// Allocation failure is fatal: the global allocator's error hook
    /// runs and the process aborts, matching the no-recovery contract
    /// for construction.
    pub(crate) fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            return Self {
                base: Self::dangling(),
                capacity: 0,
            };
        }
        let layout = Self::layout(capacity);
        // SAFETY: `layout` has non-zero size (capacity > 0 here).
        let ptr = unsafe { alloc_zeroed(layout) };
        let Some(base) = NonNull::new(ptr) else {
            handle_alloc_error(layout)
        };
        Self { base, capacity }
    }

    /// Return the region to the host allocator. Idempotent.
    pub(crate) fn release(&mut self) {
        if self.capacity == 0 {
            return;
        }
        let layout = Self::layout(self.capacity);
        // SAFETY: `base` came from `alloc_zeroed` with this exact layout
        // and has not been freed — `capacity` is zeroed below, so a
        // second call never reaches this block.
        unsafe { dealloc(self.base.as_ptr(), layout) };
        self.base = Self::dangling();
        self.capacity = 0;
    }

    /// Total size of the region in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest power-of-two alignment the address at `offset` satisfies.
    pub(crate) fn alignment_at(&self, offset: usize) -> usize {
        let addr = self.base.as_ptr() as usize + offset;
        // addr is never 0 (NonNull base, in-bounds offset), so
        // trailing_zeros is < usize::BITS.
        1 << addr.trailing_zeros()
    }

    /// Borrow `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the span exceeds the region.
    pub(crate) fn bytes(&self, offset: usize, len: usize) -> &[u8] {
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= self.capacity),
            "byte span {offset}..+{len} out of bounds for {} byte region",
            self.capacity
        );
        // SAFETY: the span is inside a live allocation (or len == 0 on a
        // dangling-but-aligned base). The region was allocated zeroed
        // and is only written through this module, so the bytes are
        // initialised.
        unsafe { std::slice::from_raw_parts(self.base.as_ptr().add(offset), len) }
    }

    /// Zero the slot at `offset` and move `T::default()` into it.
    ///
    /// Whatever bytes previously occupied the slot are overwritten
    /// without running drop glue.
    ///
    /// # Panics
    ///
    /// Panics if the slot span exceeds the region, if the slot is
    /// smaller than `T`, or if the slot address is misaligned for `T` —
    /// the arena validates all three before calling.
    pub(crate) fn place_default<T: Default>(&mut self, offset: usize, slot_size: usize) {
        assert!(slot_size >= std::mem::size_of::<T>(), "slot too small for type");
        assert!(
            offset.checked_add(slot_size).is_some_and(|end| end <= self.capacity),
            "slot span {offset}..+{slot_size} out of bounds for {} byte region",
            self.capacity
        );
        self.check_typed::<T>(offset);
        // SAFETY: the span is in bounds of an exclusively-owned
        // allocation (&mut self), the address is aligned for T, and the
        // typed write moves a valid T into place.
        unsafe {
            let start = self.base.as_ptr().add(offset);
            std::ptr::write_bytes(start, 0, slot_size);
            start.cast::<T>().write(T::default());
        }
    }

    /// Checked cast: borrow the value of type `T` at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the span exceeds the region or the address is
    /// misaligned for `T`. Callers must only pass offsets of slots that
    /// currently hold a `T` (the arena's epoch checks enforce this).
    pub(crate) fn typed_ref<T>(&self, offset: usize) -> &T {
        self.check_typed::<T>(offset);
        // SAFETY: bounds and alignment hold per check_typed; the slot
        // holds a live T placed by place_default.
        unsafe { &*self.base.as_ptr().add(offset).cast::<T>() }
    }

    /// Checked cast: mutably borrow the value of type `T` at `offset`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`RawRegion::typed_ref`].
    pub(crate) fn typed_mut<T>(&mut self, offset: usize) -> &mut T {
        self.check_typed::<T>(offset);
        // SAFETY: bounds and alignment hold per check_typed; &mut self
        // guarantees exclusivity; the slot holds a live T.
        unsafe { &mut *self.base.as_ptr().add(offset).cast::<T>() }
    }

    fn check_typed<T>(&self, offset: usize) {
        assert!(
            offset
                .checked_add(std::mem::size_of::<T>())
                .is_some_and(|end| end <= self.capacity),
            "typed span out of bounds at offset {offset}"
        );
        assert!(
            self.alignment_at(offset) >= std::mem::align_of::<T>(),
            "address at offset {offset} misaligned for type"
        );
    }

    fn layout(capacity: usize) -> Layout {
        Layout::from_size_align(capacity, WORD_SIZE)
            .expect("region size exceeds isize::MAX bytes")
    }

    fn dangling() -> NonNull<u8> {
        // Dangling through usize so the unused base is still word-aligned.
        NonNull::<usize>::dangling().cast()
    }
}

impl Drop for RawRegion {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_is_zeroed() {
        let region = RawRegion::allocate(64);
        assert!(region.bytes(0, 64).iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_capacity_allocates_nothing() {
        let region = RawRegion::allocate(0);
        assert_eq!(region.capacity(), 0);
        assert!(region.bytes(0, 0).is_empty());
    }

    #[test]
    fn base_is_word_aligned() {
        let region = RawRegion::allocate(128);
        assert!(region.alignment_at(0) >= WORD_SIZE);
    }

    #[test]
    fn place_default_then_read_back() {
        let mut region = RawRegion::allocate(16);
        region.place_default::<u32>(8, 8);
        *region.typed_mut::<u32>(8) = 0xAB;
        assert_eq!(*region.typed_ref::<u32>(8), 0xAB);
        // Slot padding beyond the u32 stays zero.
        assert_eq!(region.bytes(12, 4), &[0, 0, 0, 0]);
    }

    #[test]
    fn release_is_idempotent() {
        let mut region = RawRegion::allocate(32);
        region.release();
        region.release();
        assert_eq!(region.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn oversized_byte_span_panics() {
        let region = RawRegion::allocate(8);
        let _ = region.bytes(4, 8);
    }
}
