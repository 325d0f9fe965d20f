use crate::binary_heap_iter::BinaryHeapIter;
use crate::comparable::Comparable;
use crate::errors::HeapError;
use crate::sift::{self, HeapOrder};
use log::{error, trace};
use std::ops::Index;

/// A min-heap stored as a complete binary tree in a `Vec`.
///
/// The element at index 0 is always the minimum under `Comparable::less`. The
/// children of index `i` live at `2i + 1` and `2i + 2`. Among equal elements
/// the pop order is implementation-defined but deterministic.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
}
impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        BinaryHeap { data: Vec::new() }
    }
}
impl<T: Comparable> BinaryHeap<T> {
    /// Constructs a new empty `BinaryHeap<T>`.
    pub fn new() -> BinaryHeap<T> {
        BinaryHeap::default()
    }
    /// Takes ownership of `data` without reordering it.
    ///
    /// Heap order is not established: `init` must be called before relying on
    /// `peek`, `pop` or any other operation that assumes it.
    pub fn from_unordered(data: Vec<T>) -> BinaryHeap<T> {
        BinaryHeap { data }
    }
    /// Rearranges the elements into heap order.
    /// Complexity is O(N)
    pub fn init(&mut self) {
        trace!("heapifying {} elements", self.data.len());
        sift::init(self.data.as_mut_slice());
    }
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Returns `true` if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Remove all the elements inside the heap.
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.data.len());
        self.data.clear();
    }
    /// Insert an element inside the heap.
    /// Complexity is O(log(N)), O(1) when the element is not less than its parent.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        let last = self.data.len() - 1;
        sift::sift_up(self.data.as_mut_slice(), last);
    }
    /// Removes and returns the minimum element, or `None` if the heap is empty.
    /// Complexity is O(log(N))
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        let n = self.data.len();
        sift::sift_down(self.data.as_mut_slice(), 0, n);
        Some(min)
    }
    /// Removes and returns the minimum element.
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn must_pop(&mut self) -> T {
        match self.pop() {
            Some(min) => min,
            None => violated(HeapError::Empty),
        }
    }
    /// Returns the minimum element without removing it, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }
    /// Returns the minimum element without removing it.
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn must_peek(&self) -> &T {
        match self.data.first() {
            Some(min) => min,
            None => violated(HeapError::Empty),
        }
    }
    /// Restores heap order after the element at index `i` has been changed
    /// through `get_mut`.
    /// Complexity is O(log(N))
    ///
    /// Panics if `i` is out of bounds.
    #[track_caller]
    pub fn fix(&mut self, i: usize) {
        if let Err(err) = self.try_fix(i) {
            violated(err)
        }
    }
    /// Same as `fix` but reports an out of bounds index as an error.
    pub fn try_fix(&mut self, i: usize) -> Result<(), HeapError> {
        self.check_index(i)?;
        sift::fix(self.data.as_mut_slice(), i);
        Ok(())
    }
    /// Removes and returns the element at index `i`, which is not necessarily
    /// the minimum.
    /// Complexity is O(log(N))
    ///
    /// Panics if `i` is out of bounds.
    #[track_caller]
    pub fn remove_at(&mut self, i: usize) -> T {
        match self.try_remove_at(i) {
            Ok(element) => element,
            Err(err) => violated(err),
        }
    }
    /// Same as `remove_at` but reports an out of bounds index as an error.
    pub fn try_remove_at(&mut self, i: usize) -> Result<T, HeapError> {
        self.check_index(i)?;
        // the last element takes the vacated slot
        let removed = self.data.swap_remove(i);
        let n = self.data.len();
        if i < n {
            let data = self.data.as_mut_slice();
            if !sift::sift_down(data, i, n) {
                sift::sift_up(data, i);
            }
        }
        Ok(removed)
    }
    /// Exchanges the elements at `i` and `j`. Heap order is not restored.
    ///
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) {
        if let Err(err) = self.try_swap(i, j) {
            violated(err)
        }
    }
    /// Same as `swap` but reports an out of bounds index as an error.
    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), HeapError> {
        self.check_index(i)?;
        self.check_index(j)?;
        HeapOrder::swap(self.data.as_mut_slice(), i, j);
        Ok(())
    }
    /// Returns a reference to the element at index `i`, if any.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }
    /// Returns a mutable reference to the element at index `i`, if any.
    ///
    /// Changing how the element compares breaks heap order until `fix(i)` is called.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }
    /// Returns the elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
    /// Returns `true` if every element is not less than its parent.
    pub fn is_heap(&self) -> bool {
        sift::is_heap(self.data.as_slice())
    }
    // Returns an iterator over the heap in storage order
    pub fn iter(&self) -> BinaryHeapIter<'_, T> {
        BinaryHeapIter {
            data: &self.data,
            pos: 0,
        }
    }
    /// Consumes the heap and returns the backing vector in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
    /// Consumes the heap and returns its elements in ascending order.
    /// Complexity is O(N log(N))
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(min) = self.pop() {
            sorted.push(min);
        }
        sorted
    }
    #[inline]
    fn check_index(&self, i: usize) -> Result<(), HeapError> {
        if i < self.data.len() {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfBounds {
                index: i,
                len: self.data.len(),
            })
        }
    }
}

/// Reports a broken caller precondition and aborts the operation.
#[cold]
#[track_caller]
fn violated(err: HeapError) -> ! {
    error!("heap precondition violated: {}", err);
    panic!("{}", err)
}

impl<T: Comparable> HeapOrder for BinaryHeap<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i].less(&self.data[j])
    }
    fn swap(&mut self, i: usize, j: usize) {
        HeapOrder::swap(self.data.as_mut_slice(), i, j);
    }
}
impl<T: Comparable> Index<usize> for BinaryHeap<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.data.get(index) {
            Some(element) => element,
            None => violated(HeapError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            }),
        }
    }
}
impl<T: Comparable> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = BinaryHeap::from_unordered(data);
        heap.init();
        heap
    }
}
impl<T: Comparable> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeap::from(iter.into_iter().collect::<Vec<T>>())
    }
}
impl<T: Comparable> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}
impl<'a, T: Comparable> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;

    type IntoIter = BinaryHeapIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
