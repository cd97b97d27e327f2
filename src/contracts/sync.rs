use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::contracts::{pairs, ContractPair};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct SyncedContract {
    pub local_path: PathBuf,
    pub bytes_written: usize,
}

pub struct ContractSyncer {
    config: Config,
    client: reqwest::Client,
}

impl ContractSyncer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Mirror every enabled contract pair from upstream, overwriting local copies.
    ///
    /// Fetches are sequential and fail-fast: the registry is only requested
    /// after the schema has been fetched and written.
    pub async fn sync(&self) -> Result<Vec<SyncedContract>> {
        tracing::info!(
            "Syncing contracts from {}/{} at ref '{}'",
            self.config.owner,
            self.config.repo,
            self.config.upstream_ref
        );

        let mut synced = Vec::new();
        for pair in pairs(&self.config) {
            synced.push(self.fetch_one(&pair).await?);
        }

        Ok(synced)
    }

    async fn fetch_one(&self, pair: &ContractPair) -> Result<SyncedContract> {
        let url = pair.upstream_url(&self.config);
        tracing::info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", url, e)))?
            .error_for_status()
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", url, e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", url, e)))?;

        let local_path = pair.local_path(&self.config);
        fs::write(&local_path, &body)
            .map_err(|e| Error::WriteFailed(format!("{}: {}", local_path.display(), e)))?;

        println!("✓ Wrote {}", local_path.display());

        Ok(SyncedContract {
            local_path,
            bytes_written: body.len(),
        })
    }
}
