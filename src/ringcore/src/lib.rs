pub mod buffer;
pub mod error;

pub use buffer::BoundedRingBuffer;
pub use error::BufferError;
