use bumpalo::Bump;
use std::cell::Cell;


/// Growable byte arena backing loaded file content
///
/// Buffers are carved out of `bumpalo` chunks, which are never moved or
/// reallocated, so every slice handed out stays at the same address until the
/// arena itself is dropped. There is no per-buffer free.
pub struct Arena {
    bump: Bump,
    allocations: Cell<usize>,
}

impl Arena {
    /// Create an empty arena. No memory is committed until the first allocation.
    pub fn new() -> Self {
        Self {
            bump: Bump::new(),
            allocations: Cell::new(0),
        }
    }

    /// Hand out a zeroed buffer of exactly `size` bytes
    ///
    /// Grows the arena by a new chunk when the current one is exhausted.
    /// Aborts the process if the system refuses to provide the chunk.
    #[allow(clippy::mut_from_ref)]
    pub fn allocate(&self, size: usize) -> &mut [u8] {
        self.allocations.set(self.allocations.get() + 1);
        self.bump.alloc_slice_fill_copy(size, 0u8)
    }

    /// Total bytes reserved from the system across all chunks
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Number of buffers handed out so far
    pub fn allocation_count(&self) -> usize {
        self.allocations.get()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
