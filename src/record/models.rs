//! Record data models
//!
//! The as-authored shape of a proposal configuration record. Everything here
//! mirrors the JSON contract (`rootOptions` / `poolOptions`) exactly; no
//! validation happens at this layer, so a deserialized record can still be
//! arbitrarily broken. [`crate::validate::validate`] is the gate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A proposal configuration record, straight off the wire.
///
/// Both top-level keys are required: `poolOptions` may be an empty map but
/// never absent. It is kept as a [`BTreeMap`] so serialization order is
/// deterministic regardless of how the record was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub root_options: RootOptions,
    pub pool_options: BTreeMap<String, PoolConfig>,
}

/// Proposal-wide metadata: what the proposal is, who wrote it, where it
/// targets, and where it votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOptions {
    /// Pool identifiers the proposal targets, e.g. `["AaveV3Ethereum"]`.
    pub pools: Vec<String>,
    /// Human-readable proposal title.
    pub title: String,
    /// PascalCase identifier used in artifact and directory names.
    pub short_name: String,
    /// Authoring date in `YYYYMMDD` form.
    pub date: String,
    pub author: String,
    /// Forum discussion URL; empty until the thread exists.
    #[serde(default)]
    pub discussion: String,
    /// Snapshot vote URL; empty until the vote exists.
    #[serde(default)]
    pub snapshot: String,
    /// Network the governance vote runs on, e.g. `"POLYGON"`.
    pub voting_network: String,
}

/// Per-pool options: the activation parameters for one targeted pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    /// Feature payloads keyed by feature name. The schema of each payload
    /// belongs to the feature that consumes it, so they stay opaque here.
    #[serde(default)]
    pub configs: BTreeMap<String, Value>,
    pub cache: CacheOptions,
}

/// Cached chain state the generator pins itself to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheOptions {
    /// Block height the pool's state was read at. Authored as a plain JSON
    /// number; negative values are caught by validation, not by parsing.
    pub block_number: i64,
}

impl ConfigFile {
    /// Start a record with no per-pool options.
    pub fn new(root_options: RootOptions) -> Self {
        Self {
            root_options,
            pool_options: BTreeMap::new(),
        }
    }

    /// Attach (or replace) the options for one pool.
    pub fn add_pool(&mut self, pool: impl Into<String>, config: PoolConfig) {
        self.pool_options.insert(pool.into(), config);
    }
}

impl PoolConfig {
    /// Options with no feature payloads, anchored at the given block.
    pub fn anchored_at(block_number: i64) -> Self {
        Self {
            configs: BTreeMap::new(),
            cache: CacheOptions { block_number },
        }
    }
}

// =====================================================
// TESTS
// =====================================================
