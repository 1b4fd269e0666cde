use core::fmt;

/// Contract violations surfaced by heap operations. Both indicate caller
/// error (the caller is expected to check size/capacity first); neither is
/// a recoverable runtime state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Insert was attempted on a heap whose slots are already full.
    CapacityExceeded,
    /// Extract was attempted on a heap with no occupied slots.
    EmptyHeap,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded => write!(fmt, "heap is full"),
            Error::EmptyHeap => write!(fmt, "heap is empty"),
        }
    }
}

impl std::error::Error for Error {}
