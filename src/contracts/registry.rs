use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::Result;

// PREFIX_NAME_NNN, e.g. DC_UNREACHABLE_001
static RULE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,4}_[A-Z][A-Z0-9_]*_[0-9]{3}$").expect("valid pattern"));

/// The vendored rule registry: the detection-rule ids the upstream producer emits.
#[derive(Debug, Deserialize)]
pub struct RuleRegistry {
    pub supported_rule_ids: Vec<String>,
}

impl RuleRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let registry: RuleRegistry = serde_json::from_str(&content)?;
        Ok(registry)
    }

    /// Structural findings for the registry. Empty means it conforms.
    pub fn findings(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.supported_rule_ids.is_empty() {
            findings.push("supported_rule_ids is empty".to_string());
        }

        for id in &self.supported_rule_ids {
            if !RULE_ID_PATTERN.is_match(id) {
                findings.push(format!(
                    "rule id '{}' does not match PREFIX_NAME_NNN",
                    id
                ));
            }
        }

        let mut seen = HashSet::new();
        for id in &self.supported_rule_ids {
            if !seen.insert(id.as_str()) {
                findings.push(format!("duplicate rule id '{}'", id));
            }
        }

        if self
            .supported_rule_ids
            .windows(2)
            .any(|window| window[0] > window[1])
        {
            findings.push("rule ids are not sorted".to_string());
        }

        findings
    }
}
