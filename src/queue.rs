//! Indexed binary min-heap
//!
//! [`IndexedPriorityQueue`] stores `(identifier, priority)` entries in an
//! array-backed binary heap and keeps a side index from identifier to the
//! entry's current slot in that array. The index is what makes
//! [`update`](IndexedPriorityQueue::update) cheap: the entry is found without
//! scanning, its priority is replaced, and it is sifted up or down from where
//! it sits.
//!
//! Identifiers are unique within a queue. Pushing an identifier that is
//! already queued re-prioritizes the existing entry instead of adding a
//! second one.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `update`  | O(log n)   |
//!
//! Index lookups are expected O(1) (FxHash).
//!
//! # Example
//!
//! ```rust
//! use routing_pq::IndexedPriorityQueue;
//!
//! let mut queue = IndexedPriorityQueue::new();
//! queue.push("a", 10);
//! queue.push("b", 2);
//! queue.update(&"a", 1);
//!
//! let first = queue.pop().unwrap();
//! assert_eq!((first.identifier, first.priority), ("a", 1));
//! ```

use crate::error::QueueError;
use log::trace;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// An identifier and its priority, as handed back by [`IndexedPriorityQueue::pop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<I, P> {
    /// The caller's identifier for the queued item
    pub identifier: I,
    /// The ordering key; lower values are popped first
    pub priority: P,
}

/// A binary min-heap of identifiers with in-place priority updates
///
/// The heap property holds between calls: for every non-root slot `i`,
/// the priority at `(i - 1) / 2` is no greater than the priority at `i`.
/// The slot index maps every queued identifier to its true position in the
/// heap array.
///
/// Ties are not broken by insertion order; equal priorities come out in
/// whatever order the heap shape yields.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<I, P> {
    /// Heap-ordered entries
    entries: Vec<Entry<I, P>>,
    /// Identifier -> slot in `entries`
    slots: FxHashMap<I, usize>,
}

impl<I, P> IndexedPriorityQueue<I, P>
where
    I: Clone + Eq + Hash,
    P: Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries before
    /// either the heap array or the slot index reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(capacity);
        Self {
            entries: Vec::with_capacity(capacity),
            slots,
        }
    }

    /// Returns the number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queues `identifier` with `priority`
    ///
    /// If `identifier` is already queued its entry is reused: the priority is
    /// replaced as by [`update`](Self::update) and the old priority is
    /// returned. Otherwise a new entry is added and `None` is returned.
    pub fn push(&mut self, identifier: I, priority: P) -> Option<P> {
        if self.slots.contains_key(&identifier) {
            return self.update(&identifier, priority);
        }

        let slot = self.entries.len();
        self.slots.insert(identifier.clone(), slot);
        self.entries.push(Entry {
            identifier,
            priority,
        });
        self.sift_up(slot);
        None
    }

    /// Removes and returns the entry with the lowest priority
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue has no entries. The queue
    /// is left untouched in that case.
    pub fn pop(&mut self) -> Result<Entry<I, P>, QueueError> {
        if self.entries.is_empty() {
            trace!("pop on empty priority queue");
            return Err(QueueError::Empty);
        }

        // The last entry takes over the root slot
        let min = self.entries.swap_remove(0);
        self.slots.remove(&min.identifier);

        if !self.entries.is_empty() {
            self.record_slot(0);
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Replaces the priority of a queued identifier and restores heap order
    ///
    /// Returns the previous priority, or `None` if `identifier` is not
    /// queued, in which case nothing changes.
    pub fn update(&mut self, identifier: &I, priority: P) -> Option<P> {
        let Some(&slot) = self.slots.get(identifier) else {
            trace!("update for identifier not in priority queue ignored");
            return None;
        };

        let old = std::mem::replace(&mut self.entries[slot].priority, priority);
        self.fix(slot);
        Some(old)
    }

    /// Moves the entry at `slot` in whichever direction its priority requires
    fn fix(&mut self, slot: usize) {
        if slot > 0 && self.entries[slot].priority < self.entries[(slot - 1) / 2].priority {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Move entry at slot up to maintain heap property
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].priority < self.entries[parent].priority {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at slot down to maintain heap property
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Swaps two slots and keeps the index pointing at both entries
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.record_slot(a);
        self.record_slot(b);
    }

    /// Writes `slot` into the index entry of whatever now lives there
    fn record_slot(&mut self, slot: usize) {
        if let Some(indexed) = self.slots.get_mut(&self.entries[slot].identifier) {
            *indexed = slot;
        }
    }
}

impl<I, P> Default for IndexedPriorityQueue<I, P>
where
    I: Clone + Eq + Hash,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
