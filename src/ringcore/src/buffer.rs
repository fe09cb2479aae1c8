/* A bounded ring buffer with strict FIFO semantics.

The `BoundedRingBuffer<T>` stores up to a fixed number of elements
(`capacity`). Unlike an overwriting circular buffer, a full buffer rejects
new items instead of dropping the oldest: `try_push` hands the value back,
`try_pop` yields `None` on empty. Full and empty are ordinary steady
states the caller checks for, not faults.

Key details:
- `try_push` appends an element, or returns it back when the buffer is full.
- `try_pop` removes and returns the oldest element, `None` when empty.
- `peek` looks at the oldest element without consuming it.
- `capacity` returns the fixed slot count.
- `len` returns current occupancy.
- `is_empty` / `is_full` check the two boundary states.

Not safe for unsynchronized concurrent use: the buffer assumes a single
logical owner. Callers that share it across threads must serialize access
externally (e.g. behind a `Mutex`).
*/

use crate::error::BufferError;

#[derive(Debug)]
pub struct BoundedRingBuffer<T> {
    slots: Box<[Option<T>]>,
    size: usize,
    read_pos: usize,
    write_pos: usize,
}

impl<T> BoundedRingBuffer<T> {
    /// Creates an empty buffer with exactly `capacity` slots.
    ///
    /// The storage is allocated once here and never resized. Fails with
    /// [`BufferError::InvalidCapacity`] for `capacity == 0` and with
    /// [`BufferError::AllocationFailed`] when the allocator cannot provide
    /// the storage.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidCapacity);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| BufferError::AllocationFailed { capacity, source })?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            size: 0,
            read_pos: 0,
            write_pos: 0,
        })
    }

    /// Appends `value` at the write cursor.
    ///
    /// Returns `Err(value)` without mutating anything when the buffer is
    /// full, handing the rejected element back to the caller. A valid slot
    /// is never overwritten.
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.size == self.capacity() {
            return Err(value);
        }

        self.slots[self.write_pos] = Some(value);
        self.write_pos = (self.write_pos + 1) % self.capacity();
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the oldest element, or `None` when the buffer is
    /// empty. The vacated slot becomes stale until a later write reaches it.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let value = self.slots[self.read_pos].take();
        self.read_pos = (self.read_pos + 1) % self.capacity();
        self.size -= 1;
        value
    }

    /// Returns a reference to the oldest element without consuming it.
    pub fn peek(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.slots[self.read_pos].as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }
}
