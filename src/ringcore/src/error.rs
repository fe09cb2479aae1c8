use std::collections::TryReserveError;
use thiserror::Error;

/// Construction-time failures for [`BoundedRingBuffer`].
///
/// Full and empty buffers are not errors: `try_push` and `try_pop` report
/// those as rejected outcomes in their return types.
///
/// [`BoundedRingBuffer`]: crate::BoundedRingBuffer
#[derive(Debug, Error)]
pub enum BufferError {
    /// A buffer needs at least one slot; a zero-capacity buffer could never
    /// accept a write and is rejected outright.
    #[error("ring buffer capacity must be greater than zero")]
    InvalidCapacity,

    /// The allocator could not provide storage for the requested number of
    /// slots. Recoverable: the caller decides whether to retry smaller or
    /// give up.
    #[error("failed to allocate storage for {capacity} slots")]
    AllocationFailed {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
