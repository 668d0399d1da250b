//! Merge sort and membership.
//!
//! Sorting relinks the existing nodes; no node is allocated or released.
//! The split recursion is O(log n) deep. The merge step is a loop, so long
//! runs cannot exhaust the stack.

use crate::arena::NodeId;
use crate::list::OrderedList;

impl OrderedList {
    /// Sort values into non-decreasing order in place.
    pub fn sort(&mut self) {
        let len = self.arena.live();
        self.head = self.merge_sort(self.head);
        tracing::trace!(len, "sorted list");
    }

    /// Whether any node holds `key`. Linear scan; works on unsorted lists.
    pub fn contains(&self, key: i64) -> bool {
        return self.iter().any(|value| value == key);
    }

    /// Merge two sorted lists into one sorted list.
    ///
    /// Ties emit the node from `left` first. The nodes of both lists are
    /// relinked, not copied: `right`'s storage is absorbed into `left`'s, so
    /// handles taken from either list resolve in the result.
    pub fn merge_sorted(mut left: OrderedList, mut right: OrderedList) -> OrderedList {
        let right_head = right.head.take();
        left.arena.absorb(&mut right.arena);
        left.head = left.merge_chains(left.head, right_head);
        return left;
    }

    /// Sort the chain starting at `head`, returning its new head.
    fn merge_sort(&mut self, head: Option<NodeId>) -> Option<NodeId> {
        let first = head?;
        if self.next_of(first).is_none() {
            return Some(first);
        }

        let middle = self.middle_from(first);
        let second_half = self.next_of(middle);
        self.set_next(middle, None);

        let left = self.merge_sort(Some(first));
        let right = self.merge_sort(second_half);
        return self.merge_chains(left, right);
    }

    /// Merge two sorted chains, taking the lesser-or-equal front each step.
    pub(crate) fn merge_chains(
        &mut self,
        mut left: Option<NodeId>,
        mut right: Option<NodeId>,
    ) -> Option<NodeId> {
        let mut head: Option<NodeId> = None;
        let mut tail: Option<NodeId> = None;

        loop {
            let take = match (left, right) {
                (Some(l), Some(r)) => {
                    if self.value(l) <= self.value(r) {
                        left = self.next_of(l);
                        l
                    } else {
                        right = self.next_of(r);
                        r
                    }
                }
                (rest, None) | (None, rest) => {
                    self.set_next_or_head_of(&mut head, tail, rest);
                    return head;
                }
            };
            self.set_next_or_head_of(&mut head, tail, Some(take));
            tail = Some(take);
        }
    }

    /// Link `node` after `tail`, or make it the chain head when `tail` is `None`.
    fn set_next_or_head_of(
        &mut self,
        head: &mut Option<NodeId>,
        tail: Option<NodeId>,
        node: Option<NodeId>,
    ) {
        match tail {
            Some(t) => self.set_next(t, node),
            None => *head = node,
        }
    }
}
