//! Block anchor checks
//!
//! Advisory checks on the cache block numbers a record pins its pools to.
//! An anchor can be locally well-formed yet still wrong for the chain it
//! names: beyond the current head, or rewound from an earlier revision of
//! the same proposal. Findings here never fail validation; they are surfaced
//! to the author next to the generated output.

use crate::record::PoolConfig;
use crate::registry::{Chain, PoolIdentifier};
use crate::validate::ValidRecord;
use serde::{Deserialize, Serialize};

/// Severity of an anchor finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingLevel {
    Info,
    Warning,
}

/// A single advisory finding against a record's anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorFinding {
    pub level: FindingLevel,
    /// Stable machine-readable code, e.g. `BLOCK_BEYOND_HEAD`
    pub code: String,
    /// JSON path of the field the finding is about
    pub field_path: String,
    pub message: String,
}

/// Source of current chain heights.
///
/// The crate ships no chain client; the consuming pipeline implements this
/// against whatever RPC stack it already carries. Returning `None` for a
/// chain skips the height checks for pools on it.
pub trait ChainHeightSource {
    fn latest_height(&self, chain: Chain) -> Option<u64>;
}

/// Check a record's anchors against live chain heights.
///
/// Flags pools anchored beyond the current head of their chain (a height
/// that cannot have existed when the record was authored) and targeted pools
/// that carry no options entry at all. Pools naming deployments outside the
/// registry are skipped; [`ValidRecord::resolve_pools`] owns that failure.
pub fn check_anchors(record: &ValidRecord, source: &impl ChainHeightSource) -> Vec<AnchorFinding> {
    let mut findings = Vec::new();

    for pool in record.pools() {
        let config = match record.pool_config(pool) {
            Some(config) => config,
            None => {
                findings.push(AnchorFinding {
                    level: FindingLevel::Info,
                    code: "MISSING_POOL_CONFIG".to_string(),
                    field_path: format!("poolOptions.{}", pool),
                    message: format!(
                        "Pool {} has no options entry; activation will use generator defaults with no state anchor",
                        pool
                    ),
                });
                continue;
            }
        };

        let identifier = match PoolIdentifier::parse(pool) {
            Some(identifier) => identifier,
            None => continue,
        };

        let head = match source.latest_height(identifier.chain()) {
            Some(head) => head,
            None => continue,
        };

        // Validation already rejected negative anchors, so the cast is exact.
        let anchor = config.cache.block_number as u64;
        if anchor > head {
            findings.push(AnchorFinding {
                level: FindingLevel::Warning,
                code: "BLOCK_BEYOND_HEAD".to_string(),
                field_path: format!("poolOptions.{}.cache.blockNumber", pool),
                message: format!(
                    "Block {} is beyond the current {} head {}; the anchor cannot have existed at authoring time",
                    anchor,
                    identifier.chain(),
                    head
                ),
            });
        }
    }

    findings
}

/// Check that anchors never move backwards between two revisions of the same
/// proposal.
///
/// Only pools carrying options in both revisions are compared; everything
/// else is a new or removed target, not a rewind.
pub fn check_monotonic(prev: &ValidRecord, next: &ValidRecord) -> Vec<AnchorFinding> {
    let mut findings = Vec::new();

    for (pool, next_config) in next.pool_options() {
        let prev_config = match prev.pool_config(pool) {
            Some(config) => config,
            None => continue,
        };

        if rewound(prev_config, next_config) {
            findings.push(AnchorFinding {
                level: FindingLevel::Warning,
                code: "ANCHOR_REWOUND".to_string(),
                field_path: format!("poolOptions.{}.cache.blockNumber", pool),
                message: format!(
                    "Block anchor for {} moved backwards: {} -> {}",
                    pool, prev_config.cache.block_number, next_config.cache.block_number
                ),
            });
        }
    }

    findings
}

fn rewound(prev: &PoolConfig, next: &PoolConfig) -> bool {
    next.cache.block_number < prev.cache.block_number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConfigFile, PoolConfig, RootOptions};
    use crate::validate::validate;
    use std::collections::HashMap;

    /// Fixed per-chain heights for tests
    struct FixedHeights(HashMap<Chain, u64>);

    impl ChainHeightSource for FixedHeights {
        fn latest_height(&self, chain: Chain) -> Option<u64> {
            self.0.get(&chain).copied()
        }
    }

    /// A source that knows nothing
    struct NoHeights;

    impl ChainHeightSource for NoHeights {
        fn latest_height(&self, _chain: Chain) -> Option<u64> {
            None
        }
    }

    fn anchored(pools: &[(&str, i64)]) -> ValidRecord {
        let mut record = ConfigFile::new(RootOptions {
            pools: pools.iter().map(|(pool, _)| pool.to_string()).collect(),
            title: "Anchor check fixture".to_string(),
            short_name: "AnchorCheckFixture".to_string(),
            date: "20250812".to_string(),
            author: "Aave Labs".to_string(),
            discussion: String::new(),
            snapshot: String::new(),
            voting_network: "POLYGON".to_string(),
        });
        for (pool, block) in pools {
            record.add_pool(*pool, PoolConfig::anchored_at(*block));
        }
        validate(&record).unwrap()
    }

    fn heights(entries: &[(Chain, u64)]) -> FixedHeights {
        FixedHeights(entries.iter().copied().collect())
    }

    #[test]
    fn test_flags_anchor_beyond_head() {
        let record = anchored(&[("AaveV3Ethereum", 23127785)]);
        let source = heights(&[(Chain::Ethereum, 23127784)]);

        let findings = check_anchors(&record, &source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "BLOCK_BEYOND_HEAD");
        assert_eq!(findings[0].level, FindingLevel::Warning);
        assert_eq!(
            findings[0].field_path,
            "poolOptions.AaveV3Ethereum.cache.blockNumber"
        );
    }

    #[test]
    fn test_silent_at_or_below_head() {
        let record = anchored(&[("AaveV3Ethereum", 23127785)]);

        let at_head = heights(&[(Chain::Ethereum, 23127785)]);
        assert!(check_anchors(&record, &at_head).is_empty());

        let below_head = heights(&[(Chain::Ethereum, 23200000)]);
        assert!(check_anchors(&record, &below_head).is_empty());
    }

    #[test]
    fn test_checks_each_pool_against_its_own_chain() {
        let record = anchored(&[("AaveV3Ethereum", 23127785), ("AaveV3Polygon", 75000000)]);
        // Ethereum is fine, Polygon head is behind the anchor.
        let source = heights(&[(Chain::Ethereum, 23200000), (Chain::Polygon, 74999999)]);

        let findings = check_anchors(&record, &source);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].field_path,
            "poolOptions.AaveV3Polygon.cache.blockNumber"
        );
    }

    #[test]
    fn test_notes_pool_without_options() {
        let mut record = ConfigFile::new(RootOptions {
            pools: vec!["AaveV3Ethereum".to_string(), "AaveV3Polygon".to_string()],
            title: "Anchor check fixture".to_string(),
            short_name: "AnchorCheckFixture".to_string(),
            date: "20250812".to_string(),
            author: "Aave Labs".to_string(),
            discussion: String::new(),
            snapshot: String::new(),
            voting_network: "POLYGON".to_string(),
        });
        record.add_pool("AaveV3Ethereum", PoolConfig::anchored_at(23127785));
        let record = validate(&record).unwrap();

        let findings = check_anchors(&record, &heights(&[(Chain::Ethereum, 23200000)]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "MISSING_POOL_CONFIG");
        assert_eq!(findings[0].level, FindingLevel::Info);
        assert_eq!(findings[0].field_path, "poolOptions.AaveV3Polygon");
    }

    #[test]
    fn test_silent_when_source_has_no_answer() {
        let record = anchored(&[("AaveV3Ethereum", 23127785)]);
        assert!(check_anchors(&record, &NoHeights).is_empty());
    }

    #[test]
    fn test_monotonic_flags_rewound_anchor() {
        let prev = anchored(&[("AaveV3Ethereum", 23127785)]);
        let next = anchored(&[("AaveV3Ethereum", 23127700)]);

        let findings = check_monotonic(&prev, &next);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "ANCHOR_REWOUND");
        assert_eq!(
            findings[0].field_path,
            "poolOptions.AaveV3Ethereum.cache.blockNumber"
        );
    }

    #[test]
    fn test_monotonic_accepts_advancing_or_equal_anchor() {
        let prev = anchored(&[("AaveV3Ethereum", 23127785)]);

        let advanced = anchored(&[("AaveV3Ethereum", 23127790)]);
        assert!(check_monotonic(&prev, &advanced).is_empty());

        let unchanged = anchored(&[("AaveV3Ethereum", 23127785)]);
        assert!(check_monotonic(&prev, &unchanged).is_empty());
    }

    #[test]
    fn test_monotonic_ignores_newly_targeted_pool() {
        let prev = anchored(&[("AaveV3Ethereum", 23127785)]);
        let next = anchored(&[("AaveV3Ethereum", 23127785), ("AaveV3Polygon", 100)]);

        assert!(check_monotonic(&prev, &next).is_empty());
    }
}
