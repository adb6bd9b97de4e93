//! Record module - the proposal configuration record itself
//!
//! The as-authored record types, the fixed-format proposal date, and the
//! per-run record store.

mod date;
mod models;
mod store;

pub use date::ProposalDate;
pub use models::{CacheOptions, ConfigFile, PoolConfig, RootOptions};
pub use store::RecordStore;
