use std::iter::FusedIterator;

/// Iterates over the elements of a `BinaryHeap` in storage order, which is
/// heap order and not sorted order.
pub struct BinaryHeapIter<'a, T> {
    pub(crate) pos: usize,
    pub(crate) data: &'a [T],
}

impl<'a, T> Iterator for BinaryHeapIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.data.get(self.pos)?;
        self.pos += 1;
        Some(element)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.pos;
        (remaining, Some(remaining))
    }
}
impl<T> ExactSizeIterator for BinaryHeapIter<'_, T> {}
impl<T> FusedIterator for BinaryHeapIter<'_, T> {}
