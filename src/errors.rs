use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
    #[error("index `{index}` out of bounds for heap of length `{len}`")]
    IndexOutOfBounds { index: usize, len: usize },
}
