//! Govgen Config - Governance Proposal Configuration
//!
//! Typed configuration records for an on-chain governance payload pipeline.
//! A record names the protocol deployments ("pools") a proposal targets, its
//! human-readable metadata, and the per-pool block anchor the generator pins
//! its state reads to. This crate owns the record schema and everything
//! derived from it; payload encoding, diffing, and simulation live in the
//! consuming pipeline.
//!
//! The usual path through the crate:
//! - Load: parse a JSON record with [`loader::load_path`] or [`loader::load_str`]
//! - Validate: turn it into a [`ValidRecord`] with [`validate::validate`]
//! - Resolve: map its pool strings onto the deployment registry via
//!   [`ValidRecord::resolve_pools`]
//! - Check: run the advisory anchor checks in [`anchor`] against a live
//!   chain reference
//! - Name: derive output artifact names ([`ValidRecord::proposal_slug`] and
//!   friends) and key generator caches on [`ValidRecord::fingerprint`]

pub mod anchor;
mod artifact;
pub mod error;
pub mod loader;
pub mod record;
pub mod registry;
pub mod validate;

pub use anchor::{check_anchors, check_monotonic, AnchorFinding, ChainHeightSource, FindingLevel};
pub use error::{ConfigError, ConfigResult};
pub use record::{CacheOptions, ConfigFile, PoolConfig, ProposalDate, RecordStore, RootOptions};
pub use registry::{Chain, PoolIdentifier, ProtocolVersion, VotingNetwork};
pub use validate::{validate, ValidRecord};
