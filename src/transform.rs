//! Structural transforms: reversal, rotation, pair swaps, deduplication,
//! and cycle detection.
//!
//! All of these relink nodes in place. Empty and single-node lists are
//! valid inputs and come back unchanged.

use rustc_hash::FxHashSet;

use crate::arena::NodeId;
use crate::list::OrderedList;

impl OrderedList {
    /// Reverse the list in place so the former tail becomes the head.
    pub fn reverse(&mut self) {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(node) = current {
            current = self.next_of(node);
            self.set_next(node, prev);
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Rotate right by `k`: the last `k % len` nodes move to the front.
    ///
    /// The list is briefly closed into a ring, walked to the new tail, and
    /// reopened there.
    pub fn rotate_right(&mut self, k: usize) {
        let Some(head) = self.head else {
            return;
        };
        if k == 0 {
            return;
        }

        let mut size = 1;
        let mut tail = head;
        while let Some(next) = self.next_of(tail) {
            tail = next;
            size += 1;
        }

        let k = k % size;
        if k == 0 {
            return;
        }

        self.set_next(tail, Some(head));
        let mut new_tail = tail;
        for _ in 0..(size - k) {
            // The ring is closed, so every node has a successor.
            new_tail = match self.next_of(new_tail) {
                Some(node) => node,
                None => break,
            };
        }
        self.head = self.next_of(new_tail);
        self.set_next(new_tail, None);
        tracing::trace!(k, size, "rotated list");
    }

    /// Swap nodes two at a time from the head (1<->2, 3<->4, ...).
    ///
    /// Relinks nodes rather than exchanging values; a trailing odd node stays
    /// put. Returns the new head.
    pub fn swap_adjacent_pairs(&mut self) -> Option<NodeId> {
        // `None` stands in for a sentinel in front of the head.
        let mut prev: Option<NodeId> = None;
        loop {
            let first = match prev {
                Some(node) => self.next_of(node),
                None => self.head,
            };
            let Some(first) = first else { break };
            let Some(second) = self.next_of(first) else { break };

            let rest = self.next_of(second);
            self.set_next(first, rest);
            self.set_next(second, Some(first));
            self.set_next_or_head(prev, Some(second));

            prev = Some(first);
        }
        return self.head;
    }

    /// Keep the first node of each distinct value and release the rest.
    ///
    /// Survivors keep their relative order. Returns the number of nodes removed.
    pub fn remove_duplicates(&mut self) -> usize {
        let mut seen: FxHashSet<i64> = FxHashSet::default();
        let mut removed = 0;
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;

        while let Some(node) = current {
            let next = self.next_of(node);
            let Some(value) = self.value(node) else { break };
            if seen.insert(value) {
                prev = Some(node);
            } else {
                self.set_next_or_head(prev, next);
                self.arena.release(node);
                removed += 1;
            }
            current = next;
        }
        return removed;
    }

    /// Floyd's tortoise and hare.
    ///
    /// The hare starts one node ahead and moves two nodes per step to the
    /// tortoise's one. Never measures the list, so it is safe on a ring.
    pub fn has_cycle(&self) -> bool {
        let Some(head) = self.head else {
            return false;
        };
        let mut slow = head;
        let mut fast = self.next_of(head);

        while let Some(hare) = fast {
            let Some(hare_next) = self.next_of(hare) else {
                return false;
            };
            if slow == hare {
                return true;
            }
            slow = match self.next_of(slow) {
                Some(node) => node,
                None => return false,
            };
            fast = self.next_of(hare_next);
        }
        return false;
    }

    /// Point the tail's `next` at `target`, deliberately closing a cycle.
    ///
    /// This is the only way to break the acyclic invariant and exists so
    /// [`has_cycle`](Self::has_cycle) has something to find. Returns `false`
    /// (and changes nothing) if `target` is not in this list.
    ///
    /// Operations other than `has_cycle`, `clear` and drop are not meaningful
    /// on the resulting ring; call [`unlink_tail`](Self::unlink_tail) with the
    /// same node to reopen it.
    pub fn link_tail_to(&mut self, target: NodeId) -> bool {
        let Some(tail) = self.tail() else {
            return false;
        };
        if self.index_of(target).is_none() {
            return false;
        }
        self.set_next(tail, Some(target));
        return true;
    }

    /// Reopen a ring closed by [`link_tail_to`](Self::link_tail_to).
    ///
    /// Cuts the first link that points back at an already-visited `target`.
    /// Returns `false` if the list does not loop back to `target`.
    pub fn unlink_tail(&mut self, target: NodeId) -> bool {
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut current = self.head;
        while let Some(node) = current {
            visited.insert(node);
            let next = self.next_of(node);
            if next == Some(target) && visited.contains(&target) {
                self.set_next(node, None);
                return true;
            }
            current = next;
            if current.is_some_and(|n| visited.contains(&n)) {
                return false;
            }
        }
        return false;
    }
}
