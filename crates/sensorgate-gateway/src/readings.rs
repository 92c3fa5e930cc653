//! Bounded in-memory log of received readings.
//!
//! Oldest entries are evicted once `capacity` is reached; capacity 0 keeps
//! nothing. Appends from concurrent handlers are serialized by a mutex held
//! only for the push/copy itself.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use sensorgate_core::Reading;

#[derive(Debug)]
pub struct ReadingLog {
    capacity: usize,
    entries: Mutex<VecDeque<Reading>>,
}

impl ReadingLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&self, reading: Reading) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(reading);
    }

    /// Copy of the log in arrival order.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the deque half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Reading>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
