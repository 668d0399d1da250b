//! Linkage - a singly-linked list of integers and the classic algorithms on it.
//!
//! # Quick Start
//!
//! ```
//! use linkage::OrderedList;
//!
//! let mut list = OrderedList::from_values(&[4, 1, 3, 1]);
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 1, 3, 4]);
//!
//! list.remove_duplicates();
//! list.reverse();
//! assert_eq!(list.to_string(), "4, 3, 1");
//!
//! let middle = list.middle_node().unwrap();
//! assert_eq!(list.value(middle), Some(3));
//! ```
//!
//! Nodes are addressed by [`NodeId`] handles into the list's own storage.
//! Lookups that find nothing return `None`; no list operation fails.
//! [`IndexedList`] adds dense positions and binary search over a sorted list,
//! and [`io`] loads and saves lists as one-value-per-line files.

mod arena;
pub mod error;
mod indexed;
pub mod io;
mod list;
mod sort;
mod transform;

pub use arena::NodeId;
pub use error::{Error, Result};
pub use indexed::{IndexedList, Occurrences};
pub use list::{Iter, Nodes, OrderedList};
