//! AFL fuzz harness for OrderedList
//!
//! Replays a byte-driven sequence of operations against both an OrderedList
//! and a Vec model, checking after every step that:
//! 1. The value sequences agree
//! 2. No operation ever introduces a cycle
//! 3. Lookups by position agree from both ends

use afl::fuzz;
use linkage::OrderedList;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Append { value: i8 },
    Delete { value: i8 },
    Reverse,
    Sort,
    Rotate { k: u8 },
    SwapPairs,
    Dedup,
    /// Close a ring onto the node at `at`, check detection, then reopen it
    Loop { at: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Append { value: rest[0] as i8 }, &rest[1..])),
            1 if !rest.is_empty() => Some((FuzzOp::Delete { value: rest[0] as i8 }, &rest[1..])),
            2 => Some((FuzzOp::Reverse, rest)),
            3 => Some((FuzzOp::Sort, rest)),
            4 if !rest.is_empty() => Some((FuzzOp::Rotate { k: rest[0] }, &rest[1..])),
            5 => Some((FuzzOp::SwapPairs, rest)),
            6 => Some((FuzzOp::Dedup, rest)),
            7 if !rest.is_empty() => Some((FuzzOp::Loop { at: rest[0] }, &rest[1..])),
            _ => None,
        }
    }
}

fn apply_model(model: &mut Vec<i64>, op: FuzzOp) {
    match op {
        FuzzOp::Append { value } => model.push(value as i64),
        FuzzOp::Delete { value } => {
            if let Some(i) = model.iter().position(|&v| v == value as i64) {
                model.remove(i);
            }
        }
        FuzzOp::Reverse => model.reverse(),
        FuzzOp::Sort => model.sort(),
        FuzzOp::Rotate { k } => {
            if !model.is_empty() {
                let k = k as usize % model.len();
                model.rotate_right(k);
            }
        }
        FuzzOp::SwapPairs => {
            for pair in model.chunks_mut(2) {
                pair.reverse();
            }
        }
        FuzzOp::Dedup => {
            let mut seen = std::collections::HashSet::new();
            model.retain(|v| seen.insert(*v));
        }
        FuzzOp::Loop { .. } => {}
    }
}

fn apply_list(list: &mut OrderedList, op: FuzzOp) {
    match op {
        FuzzOp::Append { value } => {
            list.append(value as i64);
        }
        FuzzOp::Delete { value } => {
            list.delete_value(value as i64);
        }
        FuzzOp::Reverse => list.reverse(),
        FuzzOp::Sort => list.sort(),
        FuzzOp::Rotate { k } => list.rotate_right(k as usize),
        FuzzOp::SwapPairs => {
            list.swap_adjacent_pairs();
        }
        FuzzOp::Dedup => {
            list.remove_duplicates();
        }
        FuzzOp::Loop { at } => {
            let len = list.len();
            if len == 0 {
                return;
            }
            let target = list.node_at(at as usize % len).expect("index within length");
            assert!(list.link_tail_to(target));
            assert!(list.has_cycle(), "ring onto index {} not detected", at as usize % len);
            assert!(list.unlink_tail(target));
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list = OrderedList::new();
        let mut model: Vec<i64> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            apply_model(&mut model, op);
            apply_list(&mut list, op);

            assert_eq!(list.to_vec(), model, "diverged after {:?}", op);
            assert!(!list.has_cycle(), "cycle after {:?}", op);

            let len = model.len();
            for n in 0..len {
                assert_eq!(list.node_from_end(n), list.node_at(len - 1 - n));
            }
        }
    });
}
