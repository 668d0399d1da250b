//! Position-indexed search over a sorted list.
//!
//! [`IndexedList`] wraps an [`OrderedList`] and gives every node a dense
//! 0-based `position`. Positions are assigned on append (tail + 1) and
//! recomputed after every sort; there is no way to set one directly, and the
//! wrapper exposes no edit that could leave them stale.
//!
//! The searches assume the list is sorted. Appending out of order after a
//! sort breaks that assumption and the searches do not check for it: they
//! may miss values that are present.

use std::cmp::Ordering;
use std::path::Path;

use smallvec::SmallVec;

use crate::arena::NodeId;
use crate::error::Result;
use crate::io;
use crate::list::OrderedList;

/// The first node holding a value and how many consecutive nodes hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrences {
    pub first: NodeId,
    pub count: usize,
}

/// A list whose nodes carry dense positions for binary search.
#[derive(Default)]
pub struct IndexedList {
    list: OrderedList,
}

impl IndexedList {
    pub fn new() -> IndexedList {
        return IndexedList { list: OrderedList::new() };
    }

    /// Take ownership of `list`, numbering its nodes in their current order.
    pub fn from_list(list: OrderedList) -> IndexedList {
        let mut indexed = IndexedList { list };
        indexed.reindex();
        return indexed;
    }

    /// Load values from `path` in file order. Call [`sort`](Self::sort) before searching.
    pub fn load(path: impl AsRef<Path>) -> Result<IndexedList> {
        return io::load(path).map(IndexedList::from_list);
    }

    /// The underlying list, read-only.
    pub fn list(&self) -> &OrderedList {
        return &self.list;
    }

    pub fn into_list(self) -> OrderedList {
        return self.list;
    }

    pub fn len(&self) -> usize {
        return self.list.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.list.is_empty();
    }

    /// Position of `node`, or `None` for a handle not in this list.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        return self.list.arena.get(node).map(|slot| slot.position);
    }

    /// Append `value` with position one past the current tail.
    pub fn append(&mut self, value: i64) -> NodeId {
        let tail = self.list.tail();
        let position = match tail {
            Some(node) => self.position(node).map_or(0, |p| p + 1),
            None => 0,
        };
        let node = self.list.push_after(tail, value);
        if let Some(slot) = self.list.arena.get_mut(node) {
            slot.position = position;
        }
        return node;
    }

    /// Sort by value and renumber positions densely from the head.
    pub fn sort(&mut self) {
        self.list.sort();
        self.reindex();
    }

    /// Sort, renumber, then write the sorted values to `path`.
    pub fn sort_and_save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.sort();
        return io::save(path, &self.list);
    }

    fn reindex(&mut self) {
        let mut cursor = self.list.head;
        let mut position = 0;
        while let Some(node) = cursor {
            let Some(slot) = self.list.arena.get_mut(node) else { break };
            slot.position = position;
            cursor = slot.next;
            position += 1;
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Binary search for `value` over the positions `low..=high`.
    ///
    /// Returns any node in the span holding `value`. Requires the span to be
    /// densely numbered and sorted by value.
    pub fn positional_binary_search(&self, low: usize, high: usize, value: i64) -> Option<NodeId> {
        if low > high {
            return None;
        }
        let start = self.find_position(self.list.head?, low)?;
        return self.search_span(start, low, high, value);
    }

    fn search_span(&self, start: NodeId, low: usize, high: usize, value: i64) -> Option<NodeId> {
        let mid = low + (high - low) / 2;
        let middle = self.find_position(start, mid)?;
        let middle_value = self.list.value(middle)?;

        if low == high {
            return (middle_value == value).then_some(middle);
        }

        match value.cmp(&middle_value) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => {
                if mid == low {
                    return None;
                }
                return self.search_span(start, low, mid - 1, value);
            }
            Ordering::Greater => {
                let next = self.list.next_of(middle)?;
                return self.search_span(next, mid + 1, high, value);
            }
        }
    }

    /// Lowest position holding `value`.
    ///
    /// Finds any occurrence, then searches the span before it again until no
    /// earlier occurrence turns up.
    pub fn first_occurrence(&self, value: i64) -> Option<usize> {
        let last = self.position(self.list.tail()?)?;
        let mut found = self.positional_binary_search(0, last, value)?;
        loop {
            let position = self.position(found)?;
            if position == 0 {
                return Some(0);
            }
            match self.positional_binary_search(0, position - 1, value) {
                Some(earlier) => found = earlier,
                None => return Some(position),
            }
        }
    }

    /// Highest position holding `value`: find any occurrence, then walk forward.
    pub fn last_occurrence(&self, value: i64) -> Option<usize> {
        let last = self.position(self.list.tail()?)?;
        let mut node = self.positional_binary_search(0, last, value)?;
        while let Some(next) = self.list.next_of(node) {
            if self.list.value(next) != Some(value) {
                break;
            }
            node = next;
        }
        return self.position(node);
    }

    /// The first node holding `value` and the length of its run.
    pub fn all_occurrences(&self, value: i64) -> Option<Occurrences> {
        let first_position = self.first_occurrence(value)?;
        let first = self.find_position(self.list.head?, first_position)?;

        let mut count = 0;
        let mut cursor = Some(first);
        while let Some(node) = cursor {
            if self.list.value(node) != Some(value) {
                break;
            }
            count += 1;
            cursor = self.list.next_of(node);
        }
        return Some(Occurrences { first, count });
    }

    /// Every position holding `value`, ascending. Empty if absent.
    pub fn all_positions(&self, value: i64) -> SmallVec<[usize; 8]> {
        let mut positions = SmallVec::new();
        let Some(run) = self.all_occurrences(value) else {
            return positions;
        };
        let mut cursor = Some(run.first);
        for _ in 0..run.count {
            let Some(node) = cursor else { break };
            if let Some(position) = self.position(node) {
                positions.push(position);
            }
            cursor = self.list.next_of(node);
        }
        return positions;
    }

    /// The node at position `(low + high) / 2`, or `None` for an empty span.
    pub fn middle_by_position(&self, low: usize, high: usize) -> Option<NodeId> {
        if low > high {
            return None;
        }
        return self.find_position(self.list.head?, low + (high - low) / 2);
    }

    /// Walk forward from `start` to the node numbered `position`.
    ///
    /// Gives up once positions pass the target, which is what a stale or
    /// absent position looks like.
    fn find_position(&self, start: NodeId, position: usize) -> Option<NodeId> {
        let mut node = start;
        loop {
            let current = self.position(node)?;
            match current.cmp(&position) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => return None,
                Ordering::Less => node = self.list.next_of(node)?,
            }
        }
    }
}

impl From<OrderedList> for IndexedList {
    fn from(list: OrderedList) -> IndexedList {
        return IndexedList::from_list(list);
    }
}
