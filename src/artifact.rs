//! Artifact naming
//!
//! Every output of a generation run is named from the record: the proposal
//! directory `<date>_<pools>_<shortName>`, per-pool payload artifacts
//! `<pool>_<shortName>_<date>`, and the AIP text `<shortName>.md`. The names
//! are derived here once so the generator, its tests, and any archive tooling
//! agree byte for byte.

use crate::registry::PoolIdentifier;
use crate::validate::ValidRecord;

/// Pool segment of a slug: the identifiers joined by `_`, collapsed to
/// `Multi` once more than two pools would make the name unwieldy.
fn pools_label(pools: &[String]) -> String {
    if pools.len() > 2 {
        "Multi".to_string()
    } else {
        pools.join("_")
    }
}

impl ValidRecord {
    /// Directory slug for this proposal,
    /// e.g. `20250812_AaveV3Ethereum_HorizonRWAInstanceActivation`.
    pub fn proposal_slug(&self) -> String {
        format!(
            "{}_{}_{}",
            self.date(),
            pools_label(self.pools()),
            self.short_name()
        )
    }

    /// Name of the payload artifact generated for one pool,
    /// e.g. `AaveV3Ethereum_HorizonRWAInstanceActivation_20250812`.
    pub fn payload_name(&self, pool: PoolIdentifier) -> String {
        format!("{}_{}_{}", pool, self.short_name(), self.date())
    }

    /// File name of the proposal text, e.g. `HorizonRWAInstanceActivation.md`.
    pub fn aip_name(&self) -> String {
        format!("{}.md", self.short_name())
    }
}
