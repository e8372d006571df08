use std::cell::{Cell, RefCell};

use crate::{CoreError, RecordStorage};

/// Volatile backend for tests. Only built with the `test-support` feature.
#[derive(Debug, Default)]
pub struct MemoryStorage<R> {
    records: RefCell<Vec<R>>,
    saves: Cell<usize>,
}

impl<R: Clone> MemoryStorage<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RefCell::new(records),
            saves: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl<R: Clone> RecordStorage<R> for MemoryStorage<R> {
    fn load(&self) -> Result<Vec<R>, CoreError> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[R]) -> Result<(), CoreError> {
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
