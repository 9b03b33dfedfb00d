use std::fmt::Debug;
use num_traits::Float;

use super::try_filled;
use crate::Result;

#[inline]
fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

#[inline]
fn left(slot: usize) -> usize {
    2 * slot + 1
}

#[inline]
fn right(slot: usize) -> usize {
    2 * slot + 2
}

/// A binary min-heap over the vertices `0..n`, keyed by a per-vertex estimate.
///
/// Besides the heap array (`slots`), the heap keeps a position map from vertex
/// identity to its current slot, so that [`decrease_key`](Self::decrease_key)
/// runs in `O(log n)` given only the vertex. The position map is updated on
/// every swap and is the exact inverse of `slots[..len]`.
///
/// Extracted vertices keep their last key, which can still be read through
/// [`key`](Self::key).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Heap array of vertex identities; only `slots[..len]` is live
    slots: Vec<usize>,

    /// Position map: vertex identity -> slot
    position: Vec<usize>,

    /// Key of every vertex, indexed by vertex identity
    keys: Vec<W>,

    /// Logical heap size
    len: usize,
}

impl<W> IndexedMinHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a heap holding all `n` vertices, every key set to infinity.
    pub fn new(n: usize) -> Result<Self> {
        Self::from_keys(try_filled(n, W::infinity())?)
    }

    /// Creates a heap holding every vertex `v` with key `keys[v]`.
    pub fn from_keys(keys: Vec<W>) -> Result<Self> {
        let n = keys.len();
        let mut slots = Vec::new();
        slots.try_reserve_exact(n)?;
        slots.extend(0..n);
        let mut position = Vec::new();
        position.try_reserve_exact(n)?;
        position.extend(0..n);

        let mut heap = IndexedMinHeap {
            slots,
            position,
            keys,
            len: n,
        };
        for slot in (0..n / 2).rev() {
            heap.heapify(slot);
        }
        Ok(heap)
    }

    /// Number of vertices still in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if every vertex has been extracted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of the heap, i.e. the number of vertices it was built over
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if `vertex` has not been extracted yet
    pub fn contains(&self, vertex: usize) -> bool {
        vertex < self.position.len() && self.position[vertex] < self.len
    }

    /// Current key of a vertex
    pub fn key(&self, vertex: usize) -> Option<W> {
        self.keys.get(vertex).copied()
    }

    /// Slot currently occupied by a vertex still in the heap
    pub fn position(&self, vertex: usize) -> Option<usize> {
        if self.contains(vertex) {
            Some(self.position[vertex])
        } else {
            None
        }
    }

    /// Returns the minimum vertex and its key without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        if self.is_empty() {
            None
        } else {
            let vertex = self.slots[0];
            Some((vertex, self.keys[vertex]))
        }
    }

    /// Removes the vertex with the minimum key.
    ///
    /// The last live slot moves to the root and is sifted down.
    pub fn extract_min(&mut self) -> Option<(usize, W)> {
        if self.is_empty() {
            return None;
        }

        let min = self.slots[0];
        self.len -= 1;
        if self.len > 0 {
            self.swap(0, self.len);
            self.heapify(0);
        }
        Some((min, self.keys[min]))
    }

    /// Lowers the key of `vertex` to `value` and sifts it up.
    ///
    /// Returns true if the key changed. A value that is not smaller than the
    /// current key, or a vertex that is no longer in the heap, leaves the heap
    /// untouched.
    pub fn decrease_key(&mut self, vertex: usize, value: W) -> bool {
        if !self.contains(vertex) || !(value < self.keys[vertex]) {
            return false;
        }

        self.keys[vertex] = value;
        let mut slot = self.position[vertex];
        while slot > 0 && self.slot_key(parent(slot)) > self.slot_key(slot) {
            self.swap(slot, parent(slot));
            slot = parent(slot);
        }
        true
    }

    /// Restores the heap order below `slot`, assuming both subtrees are heaps.
    ///
    /// Swaps with the smaller child (left on ties) until no child is smaller.
    /// A slot outside the live heap is ignored.
    pub fn heapify(&mut self, mut slot: usize) {
        if slot >= self.len {
            return;
        }
        loop {
            let (l, r) = (left(slot), right(slot));
            let mut smallest = slot;

            if l < self.len && self.slot_key(l) < self.slot_key(smallest) {
                smallest = l;
            }
            if r < self.len && self.slot_key(r) < self.slot_key(smallest) {
                smallest = r;
            }
            if smallest == slot {
                return;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Checks the heap order and that the position map inverts the heap array
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.len).all(|slot| !(self.slot_key(parent(slot)) > self.slot_key(slot)));
        let indexed = self.slots[..self.len]
            .iter()
            .enumerate()
            .all(|(slot, &vertex)| self.position[vertex] == slot);
        ordered && indexed
    }

    #[inline]
    fn slot_key(&self, slot: usize) -> W {
        self.keys[self.slots[slot]]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.position[self.slots[i]] = i;
        self.position[self.slots[j]] = j;
    }
}
