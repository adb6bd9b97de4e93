//! Record validation
//!
//! The single gate between an as-authored record and the payload pipeline.
//! [`validate`] checks every local invariant in a fixed order and stops at the
//! first violation; an invalid record never reaches the generator, partially
//! processed or otherwise.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::record::{ConfigFile, PoolConfig, ProposalDate};
use crate::registry::{PoolIdentifier, VotingNetwork};

/// Artifact-safe short names: a letter followed by letters and digits.
static SHORT_NAME_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").unwrap());

/// Validate a record against every local invariant.
///
/// Checks run in a fixed order: pools non-empty, title non-empty, short-name
/// shape, date format, URL fields, voting-network membership, orphan pool
/// options, block-number sign. Pool options are visited in key order, so the
/// reported pool is deterministic when several entries are broken.
///
/// Registry membership of the pool identifiers themselves is deliberately not
/// checked here; that is a generator-boundary concern, exposed separately as
/// [`ValidRecord::resolve_pools`].
pub fn validate(record: &ConfigFile) -> ConfigResult<ValidRecord> {
    let root = &record.root_options;

    if root.pools.is_empty() {
        return Err(ConfigError::MissingPools);
    }

    if root.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }

    if !SHORT_NAME_SHAPE.is_match(&root.short_name) {
        return Err(ConfigError::InvalidShortName {
            value: root.short_name.clone(),
        });
    }

    let date = ProposalDate::parse(&root.date)?;

    check_url("discussion", &root.discussion)?;
    check_url("snapshot", &root.snapshot)?;

    let voting_network = VotingNetwork::parse(&root.voting_network).ok_or_else(|| {
        ConfigError::UnknownVotingNetwork {
            value: root.voting_network.clone(),
        }
    })?;

    for pool in record.pool_options.keys() {
        if !root.pools.contains(pool) {
            return Err(ConfigError::OrphanPoolConfig { pool: pool.clone() });
        }
    }

    for (pool, config) in &record.pool_options {
        if config.cache.block_number < 0 {
            return Err(ConfigError::NegativeBlockNumber {
                pool: pool.clone(),
                value: config.cache.block_number,
            });
        }
    }

    Ok(ValidRecord {
        root_options: ValidRootOptions {
            pools: root.pools.clone(),
            title: root.title.clone(),
            short_name: root.short_name.clone(),
            date,
            author: root.author.clone(),
            discussion: root.discussion.clone(),
            snapshot: root.snapshot.clone(),
            voting_network,
        },
        pool_options: record.pool_options.clone(),
    })
}

/// Empty URL fields mean "not published yet" and pass; anything else must
/// parse as an absolute URL.
fn check_url(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })?;
    Ok(())
}

/// A record that passed [`validate`].
///
/// Fields are private and there is no `Deserialize` impl: holding a
/// `ValidRecord` proves the invariants were checked. Serializing one yields
/// exactly the wire form of the record it was validated from, so it can be
/// archived or fingerprinted without losing information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidRecord {
    root_options: ValidRootOptions,
    pool_options: BTreeMap<String, PoolConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidRootOptions {
    pools: Vec<String>,
    title: String,
    short_name: String,
    date: ProposalDate,
    author: String,
    discussion: String,
    snapshot: String,
    voting_network: VotingNetwork,
}

impl ValidRecord {
    /// Pool identifiers the proposal targets, in authored order.
    pub fn pools(&self) -> &[String] {
        &self.root_options.pools
    }

    pub fn title(&self) -> &str {
        &self.root_options.title
    }

    pub fn short_name(&self) -> &str {
        &self.root_options.short_name
    }

    pub fn date(&self) -> ProposalDate {
        self.root_options.date
    }

    pub fn author(&self) -> &str {
        &self.root_options.author
    }

    /// Discussion URL, or the empty string while the thread does not exist.
    pub fn discussion(&self) -> &str {
        &self.root_options.discussion
    }

    /// Snapshot vote URL, or the empty string while the vote does not exist.
    pub fn snapshot(&self) -> &str {
        &self.root_options.snapshot
    }

    pub fn voting_network(&self) -> VotingNetwork {
        self.root_options.voting_network
    }

    /// Per-pool options, keyed by pool identifier.
    pub fn pool_options(&self) -> &BTreeMap<String, PoolConfig> {
        &self.pool_options
    }

    /// Options for one pool, if the record carries any.
    pub fn pool_config(&self, pool: &str) -> Option<&PoolConfig> {
        self.pool_options.get(pool)
    }

    /// Resolve every targeted pool against the deployment registry.
    ///
    /// This is the referential check the generator runs before touching any
    /// chain: a record can be locally valid while naming a deployment this
    /// build has never heard of.
    pub fn resolve_pools(&self) -> ConfigResult<Vec<PoolIdentifier>> {
        self.root_options
            .pools
            .iter()
            .map(|pool| {
                PoolIdentifier::parse(pool).ok_or_else(|| ConfigError::UnknownPool {
                    pool: pool.clone(),
                })
            })
            .collect()
    }

    /// SHA-256 over the canonical JSON form, hex-encoded.
    ///
    /// Struct fields serialize in declaration order and pool options in key
    /// order, so equal records always hash equal. The generator keys its
    /// state cache on this value to notice record revisions.
    pub fn fingerprint(&self) -> String {
        let canonical =
            serde_json::to_string(self).expect("a validated record always serializes to JSON");
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

// =====================================================
// TESTS
// =====================================================
