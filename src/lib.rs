//! A generic binary min-heap licensed under Apache2 or MIT.
//!
//! `BinaryHeap<T>` keeps its elements in a `Vec` ordered as a complete binary
//! tree, with the minimum at index 0. Unlike `std::collections::BinaryHeap` it is
//! a min-heap over any `Comparable` element, and it exposes element positions so
//! callers can mutate an element in place and `fix` it, or remove it by index.
//!
//! The restructuring algorithms live in [`sift`] and work on any
//! [`HeapOrder`] collection, including plain slices.
//!
//! ```
//! use comparable_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.must_pop(), 3);
//! ```
mod binary_heap_iter;
mod comparable;
mod errors;
pub mod binary_heap;
pub mod sift;

pub use binary_heap::BinaryHeap;
pub use binary_heap_iter::BinaryHeapIter;
pub use comparable::Comparable;
pub use errors::HeapError;
pub use sift::HeapOrder;
