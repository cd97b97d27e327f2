pub mod check;
pub mod registry;
pub mod sync;
pub mod validate;

pub use check::{CheckOutcome, CheckReport, ContractChecker};
pub use registry::RuleRegistry;
pub use sync::{ContractSyncer, SyncedContract};
pub use validate::validate;

use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::config::Config;

/// One mirrored file: where it lives upstream and what the vendored copy is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractPair {
    pub upstream_path: &'static str,
    pub local_name: &'static str,
}

impl ContractPair {
    pub fn upstream_url(&self, config: &Config) -> String {
        format!("{}/{}", config.raw_base(), self.upstream_path)
    }

    pub fn local_path(&self, config: &Config) -> PathBuf {
        config.contracts_dir.join(self.local_name)
    }
}

pub const SCHEMA_PAIR: ContractPair = ContractPair {
    upstream_path: "schemas/run_result.schema.json",
    local_name: "run_result.schema.json",
};

pub const RULE_REGISTRY_PAIR: ContractPair = ContractPair {
    upstream_path: "schemas/rule_registry.json",
    local_name: "rule_registry.json",
};

/// The pairs a run operates on: the schema always, the registry only when enabled.
pub fn pairs(config: &Config) -> Vec<ContractPair> {
    let mut pairs = vec![SCHEMA_PAIR];
    if config.sync_rule_registry {
        pairs.push(RULE_REGISTRY_PAIR);
    }
    pairs
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_pair_is_gated_by_the_toggle() {
        let config = Config::new("main".to_string(), true);
        assert_eq!(pairs(&config), vec![SCHEMA_PAIR, RULE_REGISTRY_PAIR]);

        let config = Config::new("main".to_string(), false);
        assert_eq!(pairs(&config), vec![SCHEMA_PAIR]);
    }

    #[test]
    fn upstream_url_joins_base_and_path() {
        let config = Config::new("v1.0.0".to_string(), true);
        assert_eq!(
            SCHEMA_PAIR.upstream_url(&config),
            "https://raw.githubusercontent.com/HanzoRazer/code-analysis-tool/v1.0.0/schemas/run_result.schema.json"
        );
    }

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
