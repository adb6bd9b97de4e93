//! Error handling module
//!
//! Every way a proposal configuration record can be rejected, one distinct
//! variant per failure. Messages carry the JSON field path so the record
//! author can fix the source file without digging through pipeline logs.

use thiserror::Error;

/// Record-level error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("rootOptions.pools: a proposal must target at least one pool")]
    MissingPools,

    #[error("rootOptions.title: title must not be empty")]
    EmptyTitle,

    #[error("rootOptions.shortName: '{value}' is not identifier-safe (expected [A-Za-z][A-Za-z0-9]*)")]
    InvalidShortName { value: String },

    #[error("rootOptions.date: '{value}' does not match YYYYMMDD or is not a calendar date")]
    MalformedDate { value: String },

    #[error("rootOptions.{field}: '{value}' is not a valid URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("rootOptions.votingNetwork: '{value}' is not a known voting network")]
    UnknownVotingNetwork { value: String },

    #[error("poolOptions.{pool}: pool is not listed in rootOptions.pools")]
    OrphanPoolConfig { pool: String },

    #[error("poolOptions.{pool}.cache.blockNumber: {value} is negative")]
    NegativeBlockNumber { pool: String, value: i64 },

    #[error("rootOptions.pools: '{pool}' is not a known pool deployment")]
    UnknownPool { pool: String },

    #[error("a record named '{short_name}' was already registered in this run")]
    DuplicateShortName { short_name: String },

    #[error("failed to parse record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record file {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for record loading and validation
pub type ConfigResult<T> = Result<T, ConfigError>;
