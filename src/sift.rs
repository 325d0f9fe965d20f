//! Heap restructuring over any collection that exposes its elements by index.
//!
//! The functions here only need to know the length of the collection, how two
//! positions compare and how to exchange them. `BinaryHeap` is built on top of
//! them, and any `[T]` of `Comparable` elements can use them directly.
use crate::comparable::Comparable;

/// An indexed, comparable, swappable collection.
///
/// `less` and `swap` are only called with indices in `0..len()`.
pub trait HeapOrder {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Reports whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Comparable> HeapOrder for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i].less(&self[j])
    }
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            <[T]>::swap(self, i, j);
        }
    }
}

/// Rearranges the collection in place into heap order.
/// Time complexity O(N)
pub fn init<H: HeapOrder + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        sift_down(h, i, n);
    }
}

/// Moves the element at `i` towards the root while it is less than its parent.
/// Returns `true` if the element moved.
#[inline]
pub fn sift_up<H: HeapOrder + ?Sized>(h: &mut H, mut i: usize) -> bool {
    let start = i;
    while i > 0 {
        let parent = (i - 1) / 2;
        if !h.less(i, parent) {
            break;
        }
        h.swap(i, parent);
        i = parent;
    }
    i != start
}

/// Moves the element at `i` towards the leaves, considering only the first `n`
/// positions, while one of its children is less than it. On equal children the
/// left one is taken. Returns `true` if the element moved.
#[inline]
pub fn sift_down<H: HeapOrder + ?Sized>(h: &mut H, mut i: usize, n: usize) -> bool {
    let start = i;
    loop {
        let left = 2 * i + 1;
        if left >= n {
            break;
        }
        let right = left + 1;
        let child = if right < n && h.less(right, left) {
            right
        } else {
            left
        };
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i != start
}

/// Restores heap order after the element at `i` changed its value.
/// Time complexity O(log(N))
pub fn fix<H: HeapOrder + ?Sized>(h: &mut H, i: usize) {
    if !sift_up(h, i) {
        let n = h.len();
        sift_down(h, i, n);
    }
}

/// Returns `true` if no element sorts before its parent.
pub fn is_heap<H: HeapOrder + ?Sized>(h: &H) -> bool {
    (1..h.len()).all(|i| !h.less(i, (i - 1) / 2))
}
