//! The singly-linked list of integers.
//!
//! [`OrderedList`] owns an arena of nodes and a `head` handle. Each node owns
//! exactly one successor link; no tail pointer is cached, so anything that
//! needs the tail walks the chain.
//!
//! Traversals are bounded by the number of live nodes. On a well-formed list
//! that bound is never reached; on a list closed into a ring with
//! [`OrderedList::link_tail_to`] it stops the walk instead of spinning.

use std::fmt;

use crate::arena::{Arena, NodeId};

/// A singly-linked sequence of `i64` values.
pub struct OrderedList {
    pub(crate) arena: Arena,
    pub(crate) head: Option<NodeId>,
}

impl OrderedList {
    /// Create an empty list.
    pub fn new() -> OrderedList {
        return OrderedList {
            arena: Arena::new(),
            head: None,
        };
    }

    /// Build a list by appending each value in order.
    pub fn from_values(values: &[i64]) -> OrderedList {
        return values.iter().copied().collect();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The first node, or `None` if the list is empty.
    pub fn head(&self) -> Option<NodeId> {
        return self.head;
    }

    /// The last node, or `None` if the list is empty. O(n).
    pub fn tail(&self) -> Option<NodeId> {
        return self.nodes().last();
    }

    /// Number of nodes reachable from the head. O(n).
    pub fn len(&self) -> usize {
        return self.nodes().count();
    }

    pub fn is_empty(&self) -> bool {
        return self.head.is_none();
    }

    /// The value stored in `node`, or `None` for a released or foreign handle.
    pub fn value(&self, node: NodeId) -> Option<i64> {
        return self.arena.get(node).map(|slot| slot.value);
    }

    /// The successor of `node`.
    pub fn next_of(&self, node: NodeId) -> Option<NodeId> {
        return self.arena.get(node).and_then(|slot| slot.next);
    }

    /// Iterate over node handles from head to tail.
    pub fn nodes(&self) -> Nodes<'_> {
        return Nodes {
            list: self,
            cursor: self.head,
            remaining: self.arena.live(),
        };
    }

    /// Iterate over values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        return Iter { nodes: self.nodes() };
    }

    /// Snapshot of the values in list order.
    pub fn to_vec(&self) -> Vec<i64> {
        return self.iter().collect();
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Append `value` after the current tail. O(n).
    ///
    /// # Panics
    ///
    /// Panics if the list's storage would exceed `u32::MAX` nodes.
    pub fn append(&mut self, value: i64) -> NodeId {
        let tail = self.tail();
        return self.push_after(tail, value);
    }

    /// Allocate `value` and link it after `tail`, which must be the current tail.
    pub(crate) fn push_after(&mut self, tail: Option<NodeId>, value: i64) -> NodeId {
        let node = self.arena.alloc(value);
        self.set_next_or_head(tail, Some(node));
        return node;
    }

    /// Remove the first node holding `value`.
    ///
    /// Returns whether a node was removed. A missing value or an empty list
    /// is a no-op.
    pub fn delete_value(&mut self, value: i64) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut found = None;
        for node in self.nodes() {
            if self.value(node) == Some(value) {
                found = Some(node);
                break;
            }
            prev = Some(node);
        }

        let Some(node) = found else {
            return false;
        };
        let next = self.next_of(node);
        self.set_next_or_head(prev, next);
        self.arena.release(node);
        return true;
    }

    /// Release every node and reset to empty. Also runs on drop.
    pub fn clear(&mut self) {
        let released = self.arena.release_all();
        self.head = None;
        if released > 0 {
            tracing::trace!(released, "cleared list");
        }
    }

    // =========================================================================
    // Traversal & lookup
    // =========================================================================

    /// The node at 0-based `index`, or `None` if `index >= len`.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        return self.nodes().nth(index);
    }

    /// The node `n` positions before the tail; `n == 0` is the tail.
    ///
    /// Single pass: a lead cursor is advanced `n + 1` steps, then lead and
    /// trail advance together until the lead runs off the end.
    pub fn node_from_end(&self, n: usize) -> Option<NodeId> {
        let mut lead = self.head;
        for _ in 0..=n {
            lead = self.next_of(lead?);
        }

        let mut trail = self.head?;
        while let Some(node) = lead {
            lead = self.next_of(node);
            trail = self.next_of(trail)?;
        }
        return Some(trail);
    }

    /// 0-based position of `node` by identity, or `None` if it is not in this list.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        if !self.arena.contains(node) {
            return None;
        }
        return self.nodes().position(|candidate| candidate == node);
    }

    /// Distance of `node` from the tail (the tail is 0), or `None` if absent.
    pub fn index_from_end(&self, node: NodeId) -> Option<usize> {
        let index = self.index_of(node)?;
        return Some(self.len() - 1 - index);
    }

    /// The node at index `(len - 1) / 2`, found with a slow/fast cursor pair.
    ///
    /// For even lengths this is the node just before the exact midpoint.
    pub fn middle_node(&self) -> Option<NodeId> {
        return self.head.map(|head| self.middle_from(head));
    }

    /// Middle of the chain starting at `start`, by the same rule as
    /// [`middle_node`](Self::middle_node). Stops at the first `None` link.
    pub(crate) fn middle_from(&self, start: NodeId) -> NodeId {
        let mut slow = start;
        let mut fast = start;
        // Bounded so a ring cannot keep the fast cursor going forever.
        for _ in 0..self.arena.live() {
            let Some(one) = self.next_of(fast) else { break };
            let Some(two) = self.next_of(one) else { break };
            fast = two;
            slow = match self.next_of(slow) {
                Some(node) => node,
                None => break,
            };
        }
        return slow;
    }

    // =========================================================================
    // Link plumbing
    // =========================================================================

    /// Point `prev.next` at `next`, or the head when `prev` is `None`.
    pub(crate) fn set_next_or_head(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(node) => self.set_next(node, next),
            None => self.head = next,
        }
    }

    pub(crate) fn set_next(&mut self, node: NodeId, next: Option<NodeId>) {
        if let Some(slot) = self.arena.get_mut(node) {
            slot.next = next;
        }
    }
}

impl Default for OrderedList {
    fn default() -> Self {
        return OrderedList::new();
    }
}

impl Drop for OrderedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<i64> for OrderedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = OrderedList::new();
        list.extend(iter);
        return list;
    }
}

impl Extend<i64> for OrderedList {
    /// Appends in order. Keeps a running tail so bulk building stays linear.
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            tail = Some(self.push_after(tail, value));
        }
    }
}

impl<'a> IntoIterator for &'a OrderedList {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}

impl fmt::Display for OrderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty linked list");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        return Ok(());
    }
}

impl fmt::Debug for OrderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl PartialEq for OrderedList {
    /// Equal when the value sequences are equal.
    fn eq(&self, other: &Self) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl Clone for OrderedList {
    /// Deep copy into a fresh arena. Handles into `self` do not resolve in the copy.
    fn clone(&self) -> Self {
        return self.iter().collect();
    }
}

/// Iterator over node handles.
pub struct Nodes<'a> {
    list: &'a OrderedList,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Nodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.list.next_of(node);
        return Some(node);
    }
}

/// Iterator over values.
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.nodes.next()?;
        return self.nodes.list.value(node);
    }
}
