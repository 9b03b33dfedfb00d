pub mod indexed_heap;

pub use indexed_heap::IndexedMinHeap;

use crate::Result;

/// Allocates a vector of `len` copies of `value`, reporting allocation failure
/// as `Error::OutOfMemory` instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items.try_reserve_exact(len)?;
    items.resize(len, value);
    Ok(items)
}
