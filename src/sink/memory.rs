//! In-memory capturing sink.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{OutputSink, Tier};

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub logger: String,
    pub tier: Tier,
    pub line: String,
}

/// Collects lines in memory, for embedding hosts that drain them and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of everything captured so far.
    pub fn records(&self) -> Vec<Record> {
        self.guard().clone()
    }

    /// Just the line text of everything captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().map(|r| r.line.clone()).collect()
    }

    /// Remove and return everything captured so far.
    pub fn drain(&self) -> Vec<Record> {
        std::mem::take(&mut *self.guard())
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, logger: &str, tier: Tier, line: &str) {
        self.guard().push(Record {
            logger: logger.to_string(),
            tier,
            line: line.to_string(),
        });
    }
}
