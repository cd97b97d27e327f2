use clap::{ArgAction, Parser, Subcommand};

use crate::config::parse_toggle;

#[derive(Parser)]
#[command(name = "contract-sync")]
#[command(version, about = "Mirror and verify vendored contracts from the upstream producer repo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the contract files from upstream, overwriting local copies
    Sync {
        /// Upstream branch or tag to fetch from
        #[arg(env = "UPSTREAM_REF", default_value = "main")]
        upstream_ref: String,

        /// Also mirror the rule registry ("0"/"false"/"False" to disable)
        #[arg(long, env = "SYNC_RULE_REGISTRY", default_value = "true", value_parser = parse_toggle, action = ArgAction::Set)]
        rule_registry: bool,
    },

    /// Verify the vendored contracts match upstream at the given ref
    Check {
        /// Upstream branch or tag to compare against
        #[arg(env = "UPSTREAM_REF", default_value = "main")]
        upstream_ref: String,

        /// Also check the rule registry ("0"/"false"/"False" to disable)
        #[arg(long, env = "SYNC_RULE_REGISTRY", default_value = "true", value_parser = parse_toggle, action = ArgAction::Set)]
        rule_registry: bool,
    },

    /// Validate the vendored contract files without touching the network
    Validate {
        /// Also validate the rule registry ("0"/"false"/"False" to disable)
        #[arg(long, env = "SYNC_RULE_REGISTRY", default_value = "true", value_parser = parse_toggle, action = ArgAction::Set)]
        rule_registry: bool,
    },

    /// List the vendored contract files with their digests
    List,
}
