//! Fixed-capacity sample ring with independent write and read cursors.
//!
//! This is deliberately not a bounded FIFO: the two cursors advance
//! independently, each wrapping modulo the capacity, with no full/empty
//! tracking relating them. The producer may overwrite a slot the consumer
//! has not read yet, and the consumer may re-read a slot the producer has
//! not refreshed. Callers serialize access through the shared mutex in
//! [`crate::tasks`]; the ring itself carries no synchronization.

/// Number of slots in the sample ring.
pub const SAMPLE_DEPTH: usize = 10;

/// Circular sample storage with independently advancing cursors.
pub struct SampleRing<T> {
    slots: [T; SAMPLE_DEPTH],
    write_at: usize,
    read_at: usize,
}

impl<T: Copy> SampleRing<T> {
    /// Creates a ring with every slot set to `fill` and both cursors at 0.
    pub fn new(fill: T) -> Self {
        Self {
            slots: [fill; SAMPLE_DEPTH],
            write_at: 0,
            read_at: 0,
        }
    }

    /// Stores `value` at the write cursor and advances it one slot.
    ///
    /// Always succeeds; an unread slot is silently overwritten.
    pub fn write(&mut self, value: T) {
        self.slots[self.write_at] = value;
        self.write_at = (self.write_at + 1) % SAMPLE_DEPTH;
    }

    /// Returns the slot under the read cursor and advances it one slot.
    ///
    /// Always succeeds; the value may be stale if the producer has not
    /// refreshed this slot since it was last read.
    pub fn read(&mut self) -> T {
        let value = self.slots[self.read_at];
        self.read_at = (self.read_at + 1) % SAMPLE_DEPTH;
        value
    }

    /// Current write cursor position.
    pub fn write_cursor(&self) -> usize {
        self.write_at
    }

    /// Current read cursor position.
    pub fn read_cursor(&self) -> usize {
        self.read_at
    }
}
