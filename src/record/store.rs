//! Record storage
//!
//! In-memory store for the validated records of one generation run. The short
//! name keys every derived artifact, so two records sharing one would clobber
//! each other's output; the store is where that uniqueness is enforced.
//!
//! Records are immutable once validated and the generator walks a run on a
//! single thread, so the store is plain `&mut self` with no locking.

use crate::error::{ConfigError, ConfigResult};
use crate::validate::ValidRecord;
use std::collections::HashMap;
use tracing::info;

/// Store for the records of a single generation run
pub struct RecordStore {
    /// Registration order, preserved for deterministic output listings
    records: Vec<ValidRecord>,
    /// Short name -> position in `records`
    index: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a validated record.
    ///
    /// Fails with [`ConfigError::DuplicateShortName`] when a record with the
    /// same short name is already part of this run.
    pub fn register(&mut self, record: ValidRecord) -> ConfigResult<()> {
        let short_name = record.short_name().to_string();
        if self.index.contains_key(&short_name) {
            return Err(ConfigError::DuplicateShortName { short_name });
        }

        info!(
            "Registered record '{}' targeting {} pool(s)",
            short_name,
            record.pools().len()
        );

        self.index.insert(short_name, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by short name
    pub fn get(&self, short_name: &str) -> Option<&ValidRecord> {
        self.index.get(short_name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.index.contains_key(short_name)
    }

    /// All records in registration order
    pub fn list(&self) -> &[ValidRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
