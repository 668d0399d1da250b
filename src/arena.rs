//! Slot storage for list nodes.
//!
//! Every node of an [`OrderedList`](crate::OrderedList) lives in a slot of
//! that list's arena. Links between nodes are [`NodeId`] handles rather than
//! pointers, so relinking can never leak or double-release a node, and a
//! deliberately introduced cycle is harmless to drop.
//!
//! A handle carries the id of the arena that issued it and the generation of
//! its slot. Released slots go on a free list and bump their generation, so a
//! stale handle (or one from another list) simply fails to resolve.
//!
//! An arena can absorb another one wholesale. The absorbed slots are appended
//! after the existing ones and the donor's id is remembered with its offset,
//! so handles the donor issued keep resolving to the same nodes.

use std::sync::atomic::{AtomicU32, Ordering};

/// Source of unique arena ids, so handles from one list never resolve in another.
static NEXT_ARENA: AtomicU32 = AtomicU32::new(0);

/// A handle to one node of a list.
///
/// Handles are cheap to copy and compare by identity, not by value: two
/// nodes holding the same value have different handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    arena: u32,
    index: u32,
    generation: u32,
}

/// One link cell.
#[derive(Debug)]
pub(crate) struct Slot {
    pub value: i64,
    pub next: Option<NodeId>,
    /// Dense rank, only maintained by [`IndexedList`](crate::IndexedList).
    pub position: usize,
    generation: u32,
    occupied: bool,
}

pub(crate) struct Arena {
    id: u32,
    slots: Vec<Slot>,
    /// Indices of released slots, reused before growing.
    free: Vec<u32>,
    live: usize,
    /// Absorbed arena ids and the offset their slots were moved to.
    absorbed: Vec<(u32, u32)>,
}

impl Arena {
    pub fn new() -> Arena {
        return Arena {
            id: NEXT_ARENA.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            absorbed: Vec::new(),
        };
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        return self.live;
    }

    /// Allocate a detached node holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow past `u32::MAX` slots.
    pub fn alloc(&mut self, value: i64) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = value;
            slot.next = None;
            slot.position = 0;
            slot.occupied = true;
            return NodeId { arena: self.id, index, generation: slot.generation };
        }

        let index = u32::try_from(self.slots.len()).expect("arena exceeded u32::MAX slots");
        self.slots.push(Slot {
            value,
            next: None,
            position: 0,
            generation: 0,
            occupied: true,
        });
        return NodeId { arena: self.id, index, generation: 0 };
    }

    /// Release a node, returning its value. Stale or foreign handles are ignored.
    pub fn release(&mut self, id: NodeId) -> Option<i64> {
        let index = self.resolve(id)?;
        let slot = self.get_mut(id)?;
        let value = slot.value;
        slot.occupied = false;
        slot.next = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
        return Some(value);
    }

    /// Move every slot of `other` into this arena, leaving `other` empty.
    ///
    /// Nodes keep their values, links and generations, and handles issued by
    /// `other` stay valid here. Nothing is allocated or released.
    ///
    /// # Panics
    ///
    /// Panics if the combined arena would exceed `u32::MAX` slots.
    pub fn absorb(&mut self, other: &mut Arena) {
        let total = self.slots.len() + other.slots.len();
        assert!(total <= u32::MAX as usize, "arena exceeded u32::MAX slots");
        let base = self.slots.len() as u32;

        self.slots.append(&mut other.slots);
        self.free.extend(other.free.drain(..).map(|index| base + index));
        self.live += other.live;
        other.live = 0;

        self.absorbed.push((other.id, base));
        for (arena, offset) in other.absorbed.drain(..) {
            self.absorbed.push((arena, base + offset));
        }
    }

    /// Slot index `id` refers to in this arena, if it was issued here or by an absorbed arena.
    fn resolve(&self, id: NodeId) -> Option<u32> {
        if id.arena == self.id {
            return Some(id.index);
        }
        let &(_, base) = self.absorbed.iter().find(|(arena, _)| *arena == id.arena)?;
        return base.checked_add(id.index);
    }

    /// Release every occupied slot exactly once.
    ///
    /// Walks the slots rather than the links, so this terminates even when
    /// the chain has been closed into a ring.
    pub fn release_all(&mut self) -> usize {
        let mut released = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.occupied {
                slot.occupied = false;
                slot.next = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                released += 1;
            }
        }
        self.live = 0;
        return released;
    }

    pub fn contains(&self, id: NodeId) -> bool {
        return self.get(id).is_some();
    }

    pub fn get(&self, id: NodeId) -> Option<&Slot> {
        let index = self.resolve(id)?;
        let slot = self.slots.get(index as usize)?;
        if !slot.occupied || slot.generation != id.generation {
            return None;
        }
        return Some(slot);
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        let index = self.resolve(id)?;
        let slot = self.slots.get_mut(index as usize)?;
        if !slot.occupied || slot.generation != id.generation {
            return None;
        }
        return Some(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_get() {
        let mut arena = Arena::new();
        let a = arena.alloc(7);
        let b = arena.alloc(9);

        assert_eq!(arena.live(), 2);
        assert_eq!(arena.get(a).map(|s| s.value), Some(7));
        assert_eq!(arena.get(b).map(|s| s.value), Some(9));
        assert_ne!(a, b);
    }

    #[test]
    fn released_slot_is_reused_with_new_generation() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        assert_eq!(arena.release(a), Some(1));
        assert_eq!(arena.live(), 0);

        let b = arena.alloc(2);
        assert_eq!(a.index, b.index);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b).map(|s| s.value), Some(2));
    }

    #[test]
    fn double_release_is_ignored() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        assert_eq!(arena.release(a), Some(1));
        assert_eq!(arena.release(a), None);
        assert_eq!(arena.live(), 0);
    }

    #[test]
    fn foreign_handle_does_not_resolve() {
        let mut left = Arena::new();
        let mut right = Arena::new();
        let a = left.alloc(1);
        let _ = right.alloc(1);

        assert!(left.contains(a));
        assert!(!right.contains(a));
        assert_eq!(right.release(a), None);
    }

    #[test]
    fn absorbed_handles_keep_resolving() {
        let mut left = Arena::new();
        let mut right = Arena::new();
        let a = left.alloc(1);
        let b = right.alloc(2);
        let c = right.alloc(3);
        right.get_mut(b).unwrap().next = Some(c);
        let freed = right.alloc(4);
        right.release(freed);

        left.absorb(&mut right);

        assert_eq!(left.live(), 3);
        assert_eq!(right.live(), 0);
        assert!(!right.contains(b));
        assert_eq!(left.get(a).map(|s| s.value), Some(1));
        assert_eq!(left.get(b).map(|s| (s.value, s.next)), Some((2, Some(c))));
        assert_eq!(left.get(c).map(|s| s.value), Some(3));
        assert!(left.get(freed).is_none());

        // The donor's free slot is reused, under a fresh handle.
        let d = left.alloc(5);
        assert_eq!(left.get(d).map(|s| s.value), Some(5));
        assert_eq!(left.live(), 4);
        assert!(left.get(freed).is_none());
    }

    #[test]
    fn released_absorbed_node_goes_stale() {
        let mut left = Arena::new();
        let mut right = Arena::new();
        let b = right.alloc(2);
        left.absorb(&mut right);

        assert_eq!(left.release(b), Some(2));
        assert!(!left.contains(b));
        let reused = left.alloc(9);
        assert_ne!(reused, b);
        assert!(!left.contains(b));
    }

    #[test]
    fn release_all_handles_ring() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.get_mut(a).unwrap().next = Some(b);
        arena.get_mut(b).unwrap().next = Some(a);

        assert_eq!(arena.release_all(), 2);
        assert_eq!(arena.live(), 0);
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));
    }
}
