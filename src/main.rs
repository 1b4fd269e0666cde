//! Walks a max heap and a min heap through a small insert/extract sequence,
//! rendering the tree after every step. Run with `RUST_LOG=debug` to see the
//! duplicate-collapse decisions.

use counted_heap::{CountedHeap, Order};

fn main() {
    env_logger::init();

    println!("== max heap ==");
    demo(Order::Max, &[1, 5, 4, 7, 6, 8, 9, 2]);

    println!("== min heap ==");
    demo(Order::Min, &[1, 5, 4, 7, 6, 8, 9, 2, 1]);
}

fn demo(order: Order, values: &[i32]) {
    let mut heap = CountedHeap::new(10, order);
    for &v in values {
        heap.insert(v).unwrap();
        println!("{}", heap.render_as_tree());
    }
    for _ in 0..3 {
        println!("popped: {}", heap.extract_top().unwrap());
        println!("{}", heap.render_as_tree());
    }
}
