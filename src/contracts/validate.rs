use std::fs;

use serde_json::Value;

use crate::config::Config;
use crate::contracts::{RuleRegistry, RULE_REGISTRY_PAIR, SCHEMA_PAIR};

/// Validate the vendored contract files on disk. No network involved.
///
/// All findings are collected in one pass rather than stopping at the first.
pub fn validate(config: &Config) -> Vec<String> {
    let mut findings = Vec::new();

    let schema_path = SCHEMA_PAIR.local_path(config);
    match fs::read_to_string(&schema_path) {
        Ok(content) => match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(_)) => {}
            Ok(_) => findings.push(format!(
                "{}: schema is not a JSON object",
                schema_path.display()
            )),
            Err(e) => findings.push(format!("{}: invalid JSON: {}", schema_path.display(), e)),
        },
        Err(e) => findings.push(format!("{}: {}", schema_path.display(), e)),
    }

    if config.sync_rule_registry {
        let registry_path = RULE_REGISTRY_PAIR.local_path(config);
        match RuleRegistry::load(&registry_path) {
            Ok(registry) => {
                for finding in registry.findings() {
                    findings.push(format!("{}: {}", registry_path.display(), finding));
                }
            }
            Err(e) => findings.push(format!("{}: {}", registry_path.display(), e)),
        }
    }

    findings
}
