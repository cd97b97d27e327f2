use std::path::PathBuf;

/// Source-of-truth repo the contract files are mirrored from.
pub const UPSTREAM_OWNER: &str = "HanzoRazer";
pub const UPSTREAM_REPO: &str = "code-analysis-tool";
pub const DEFAULT_REF: &str = "main";

const RAW_HOST: &str = "https://raw.githubusercontent.com";
const CONTRACTS_DIR: &str = "contracts";

#[derive(Debug, Clone)]
pub struct Config {
	pub owner: String,
	pub repo: String,
	pub upstream_ref: String,
	pub sync_rule_registry: bool,
	pub raw_host: String,
	pub contracts_dir: PathBuf,
}

impl Config {
	pub fn new(upstream_ref: String, sync_rule_registry: bool) -> Self {
		Self {
			owner: UPSTREAM_OWNER.to_string(),
			repo: UPSTREAM_REPO.to_string(),
			upstream_ref,
			sync_rule_registry,
			raw_host: RAW_HOST.to_string(),
			contracts_dir: PathBuf::from(CONTRACTS_DIR),
		}
	}

	/// Base URL every contract download is rooted at.
	pub fn raw_base(&self) -> String {
		format!(
			"{}/{}/{}/{}",
			self.raw_host, self.owner, self.repo, self.upstream_ref
		)
	}
}

/// Parse the boolean toggles accepted on the CLI and in the environment.
/// Only the enumerated spellings are recognized; anything else is rejected.
pub fn parse_toggle(value: &str) -> std::result::Result<bool, String> {
	match value {
		"1" | "true" | "True" => Ok(true),
		"0" | "false" | "False" => Ok(false),
		other => Err(format!(
			"expected one of 1/true/True/0/false/False, got '{}'",
			other
		)),
	}
}
