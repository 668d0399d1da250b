//! Walks a sample list through every operation and prints the results.

use linkage::OrderedList;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("linkage=info".parse()?))
        .init();

    let mut list = OrderedList::from_values(&[1, 2, 3, 4, 5]);
    println!("Original list: {}", list);

    list.delete_value(3);
    println!("After deleting 3: {}", list);

    list.reverse();
    println!("Reversed: {}", list);

    if let Some(middle) = list.middle_node() {
        println!("Middle node: {:?}", list.value(middle));
    }

    list.sort();
    println!("Sorted: {}", list);

    let key = 4;
    if list.contains(key) {
        println!("{} found in the list.", key);
    } else {
        println!("{} not found in the list.", key);
    }

    let index = 2;
    if let Some(node) = list.node_at(index) {
        println!("Node at index {}: {:?}", index, list.value(node));
    }
    if let Some(node) = list.node_from_end(0) {
        println!("Last node: {:?} (index {:?})", list.value(node), list.index_of(node));
    }

    let k = 2;
    list.rotate_right(k);
    println!("Rotated right by {}: {}", k, list);

    let merged = OrderedList::merge_sorted(
        OrderedList::from_values(&[1, 3, 5]),
        OrderedList::from_values(&[2, 4, 6]),
    );
    println!("Merged sorted lists: {}", merged);

    if list.has_cycle() {
        println!("The list has a loop.");
    } else {
        println!("The list does not have a loop.");
    }

    list.extend([3, 2, 4, 1, 3]);
    println!("Before removing duplicates: {}", list);
    let removed = list.remove_duplicates();
    println!("After removing {} duplicates: {}", removed, list);

    list.swap_adjacent_pairs();
    println!("After swapping pairs: {}", list);

    if let Some(head) = list.head() {
        list.link_tail_to(head);
        println!("Tail linked to head, has loop: {}", list.has_cycle());
        list.unlink_tail(head);
    }

    list.clear();
    println!("Cleared: {}", list);
    return Ok(());
}
