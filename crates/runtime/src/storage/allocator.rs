use lutemon_core::LutemonId;

/// Monotonic id source owned by [`Storage`](super::Storage).
///
/// Seeded from the largest id found in persisted data so ids are never
/// reused across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    /// Allocator whose next id is `last + 1`.
    pub const fn starting_after(last: u32) -> Self {
        Self { last }
    }

    pub fn allocate(&mut self) -> LutemonId {
        self.last += 1;
        LutemonId(self.last)
    }

    /// Makes sure `id` is never handed out again.
    pub fn observe(&mut self, id: LutemonId) {
        self.last = self.last.max(id.get());
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}
