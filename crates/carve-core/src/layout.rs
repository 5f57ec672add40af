//! Word-granular slot sizing.
//!
//! The arena carves its region into slots whose sizes are rounded up to
//! the platform word ([`WORD_SIZE`]). Because every slot size is a word
//! multiple, every slot start in a word-aligned region is itself
//! word-aligned, and capacity arithmetic stays type-agnostic: sizing a
//! region for `n` objects of any type is a single multiplication.
//!
//! All functions here are pure `const fn`s — no allocation, no state,
//! identical results for identical inputs.

/// Native pointer width of the target, in bytes.
///
/// This is the slot-rounding granularity: 8 on 64-bit targets, 4 on
/// 32-bit targets.
pub const WORD_SIZE: usize = std::mem::size_of::<usize>();

/// Round a byte size up to the next multiple of [`WORD_SIZE`].
///
/// `slot_size_of(0)` is 0: zero-sized types occupy no slot bytes.
///
/// # Panics
///
/// Panics if the rounded size overflows `usize` (only possible for
/// sizes within `WORD_SIZE - 1` of `usize::MAX`, which no real type
/// has).
pub const fn slot_size_of(size: usize) -> usize {
    match size.checked_add(WORD_SIZE - 1) {
        Some(padded) => padded & !(WORD_SIZE - 1),
        None => panic!("size overflows usize when rounded to word granularity"),
    }
}

/// Slot size of a type: its natural size rounded up to the word.
///
/// Variable-length types such as `String` are measured by their
/// in-memory handle size, not their content length.
pub const fn slot_size<T>() -> usize {
    slot_size_of(std::mem::size_of::<T>())
}

/// Exact region size for `count` objects of the given natural byte size.
///
/// A region of exactly this many bytes hosts exactly `count` placements
/// of the type — no bytes free, no bytes over-committed — provided no
/// other type is interleaved.
///
/// # Panics
///
/// Panics if `count * slot_size_of(size)` overflows `usize`.
pub const fn required_bytes_of(size: usize, count: usize) -> usize {
    match slot_size_of(size).checked_mul(count) {
        Some(total) => total,
        None => panic!("slot count overflows usize"),
    }
}

/// Exact region size for `count` objects of type `T`.
///
/// # Examples
///
/// ```
/// use carve_core::layout::{required_bytes, WORD_SIZE};
///
/// // A u32 occupies a full word per slot.
/// assert_eq!(required_bytes::<u32>(2), 2 * WORD_SIZE);
/// // Zero objects need zero bytes.
/// assert_eq!(required_bytes::<u64>(0), 0);
/// ```
pub const fn required_bytes<T>(count: usize) -> usize {
    required_bytes_of(std::mem::size_of::<T>(), count)
}
