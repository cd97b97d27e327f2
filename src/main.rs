mod cli;
mod config;
mod contracts;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, DEFAULT_REF};
use contracts::{CheckOutcome, ContractChecker, ContractSyncer};
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            upstream_ref,
            rule_registry,
        } => {
            let config = Config::new(upstream_ref, rule_registry);
            let syncer = ContractSyncer::new(config);
            let synced = syncer.sync().await?;

            println!();
            println!("Synced {} contract file(s):", synced.len());
            for contract in &synced {
                println!(
                    "  {} ({} bytes)",
                    contract.local_path.display(),
                    contract.bytes_written
                );
            }

            println!();
            println!("Next steps:");
            println!("  1. Inspect the changes:  git diff contracts/");
            println!("  2. Commit the update:    git add contracts/ && git commit");
            println!("  3. Push for review:      git push");
        }

        Commands::Check {
            upstream_ref,
            rule_registry,
        } => {
            let config = Config::new(upstream_ref, rule_registry);
            println!(
                "Checking contracts against upstream ref: {}",
                config.upstream_ref
            );

            let checker = ContractChecker::new(config)?;
            let report = checker.check().await?;

            for status in &report.statuses {
                if matches!(status.outcome, CheckOutcome::Match) {
                    println!("  [OK] {}", status.local_path.display());
                }
            }

            if report.is_clean() {
                println!();
                println!("OK: contracts match upstream producer repo.");
            } else {
                eprintln!();
                eprintln!("{}", report.failures().join("\n\n"));
                std::process::exit(1);
            }
        }

        Commands::Validate { rule_registry } => {
            let config = Config::new(DEFAULT_REF.to_string(), rule_registry);
            let findings = contracts::validate(&config);

            if findings.is_empty() {
                println!("OK: vendored contracts are well-formed.");
            } else {
                eprintln!("Found {} contract issue(s):", findings.len());
                for finding in &findings {
                    eprintln!("  - {}", finding);
                }
                std::process::exit(1);
            }
        }

        Commands::List => {
            let config = Config::new(DEFAULT_REF.to_string(), true);
            list_contracts(&config);
        }
    }

    Ok(())
}

fn list_contracts(config: &Config) {
    let vendored: Vec<_> = contracts::pairs(config)
        .iter()
        .filter_map(|pair| {
            let path = pair.local_path(config);
            std::fs::read(&path).ok().map(|bytes| (path, bytes))
        })
        .collect();

    if vendored.is_empty() {
        println!("No contracts vendored.");
        println!("Use 'contract-sync sync' to fetch them from upstream.");
    } else {
        println!("Vendored contracts:\n");
        for (path, bytes) in vendored {
            println!("  {}", path.display());
            println!("    Size: {} bytes", bytes.len());
            println!("    SHA-256: {}", contracts::sha256_hex(&bytes));
            println!();
        }
    }
}
