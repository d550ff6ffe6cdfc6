//! Sequential id allocation for the import pipeline
//!
//! Ids restart at 1 on every run; a re-import regenerates the same ids for
//! the same input, which keeps the process idempotent.

/// Hands out dense equipment and history ids, starting at 1
#[derive(Debug)]
pub struct IdAllocator {
    next_equipment: u32,
    next_history: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_equipment: 1,
            next_history: 1,
        }
    }

    pub fn next_equipment_id(&mut self) -> u32 {
        let id = self.next_equipment;
        self.next_equipment += 1;
        id
    }

    pub fn next_history_id(&mut self) -> u32 {
        let id = self.next_history;
        self.next_history += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
