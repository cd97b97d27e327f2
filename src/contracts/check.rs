use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::contracts::{pairs, sha256_hex, ContractPair};
use crate::error::{Error, Result};

const CHECK_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub enum CheckOutcome {
    Match,
    MissingLocal,
    Mismatch {
        upstream_sha256: String,
        local_sha256: String,
    },
}

#[derive(Debug)]
pub struct ContractStatus {
    pub local_path: PathBuf,
    pub upstream_url: String,
    pub outcome: CheckOutcome,
}

#[derive(Debug)]
pub struct CheckReport {
    pub statuses: Vec<ContractStatus>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.statuses
            .iter()
            .all(|status| matches!(status.outcome, CheckOutcome::Match))
    }

    /// Human-readable failure blocks, one per non-matching contract.
    pub fn failures(&self) -> Vec<String> {
        self.statuses
            .iter()
            .filter_map(|status| match &status.outcome {
                CheckOutcome::Match => None,
                CheckOutcome::MissingLocal => Some(format!(
                    "Missing local contract file: {}",
                    status.local_path.display()
                )),
                CheckOutcome::Mismatch {
                    upstream_sha256,
                    local_sha256,
                } => Some(format!(
                    "Contract mismatch: {path}\n  upstream: {url}\n  local:    {path}\n  sha256 upstream: {upstream}\n  sha256 local:    {local}\nFix: copy upstream file into {path} and commit.",
                    path = status.local_path.display(),
                    url = status.upstream_url,
                    upstream = upstream_sha256,
                    local = local_sha256,
                )),
            })
            .collect()
    }
}

pub struct ContractChecker {
    config: Config,
    client: reqwest::Client,
}

impl ContractChecker {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(CHECK_TIMEOUT)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Compare every enabled contract pair against upstream at the configured ref.
    ///
    /// A missing local file is recorded as a failure without fetching upstream.
    pub async fn check(&self) -> Result<CheckReport> {
        let mut statuses = Vec::new();
        for pair in pairs(&self.config) {
            statuses.push(self.check_one(&pair).await?);
        }

        Ok(CheckReport { statuses })
    }

    async fn check_one(&self, pair: &ContractPair) -> Result<ContractStatus> {
        let local_path = pair.local_path(&self.config);
        let upstream_url = pair.upstream_url(&self.config);

        if !local_path.exists() {
            return Ok(ContractStatus {
                local_path,
                upstream_url,
                outcome: CheckOutcome::MissingLocal,
            });
        }

        tracing::info!("Fetching {}", upstream_url);
        let upstream = self
            .client
            .get(&upstream_url)
            .send()
            .await
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", upstream_url, e)))?
            .error_for_status()
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", upstream_url, e)))?
            .bytes()
            .await
            .map_err(|e| Error::DownloadFailed(format!("{}: {}", upstream_url, e)))?;

        let local = fs::read(&local_path)?;

        let outcome = if upstream == local {
            CheckOutcome::Match
        } else {
            CheckOutcome::Mismatch {
                upstream_sha256: sha256_hex(&upstream),
                local_sha256: sha256_hex(&local),
            }
        };

        Ok(ContractStatus {
            local_path,
            upstream_url,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SCHEMA_BODY: &[u8] = br#"{"$id": "run_result.schema.json", "type": "object"}"#;

    fn config_for(server: &MockServer, dir: &TempDir) -> Config {
        let mut config = Config::new("main".to_string(), false);
        config.raw_host = server.uri();
        config.contracts_dir = dir.path().to_path_buf();
        config
    }

    async fn mount_schema(server: &MockServer, expect: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path(
                "/HanzoRazer/code-analysis-tool/main/schemas/run_result.schema.json",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(SCHEMA_BODY));
        match expect {
            Some(n) => mock.expect(n).mount(server).await,
            None => mock.mount(server).await,
        }
    }

    #[tokio::test]
    async fn matching_local_copy_yields_a_clean_report() {
        let server = MockServer::start().await;
        mount_schema(&server, None).await;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("run_result.schema.json"), SCHEMA_BODY).unwrap();

        let checker = ContractChecker::new(config_for(&server, &dir)).unwrap();
        let report = checker.check().await.unwrap();

        assert!(report.is_clean());
        assert!(report.failures().is_empty());
    }

    #[tokio::test]
    async fn drifted_local_copy_reports_both_digests() {
        let server = MockServer::start().await;
        mount_schema(&server, None).await;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("run_result.schema.json"), b"drifted").unwrap();

        let checker = ContractChecker::new(config_for(&server, &dir)).unwrap();
        let report = checker.check().await.unwrap();

        assert!(!report.is_clean());
        match &report.statuses[0].outcome {
            CheckOutcome::Mismatch {
                upstream_sha256,
                local_sha256,
            } => {
                assert_eq!(upstream_sha256, &sha256_hex(SCHEMA_BODY));
                assert_eq!(local_sha256, &sha256_hex(b"drifted"));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }

        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Contract mismatch:"));
        assert!(failures[0].contains("Fix: copy upstream file into"));
    }

    #[tokio::test]
    async fn missing_local_copy_skips_the_upstream_fetch() {
        let server = MockServer::start().await;
        mount_schema(&server, Some(0)).await;

        let dir = TempDir::new().unwrap();
        let checker = ContractChecker::new(config_for(&server, &dir)).unwrap();
        let report = checker.check().await.unwrap();

        assert!(!report.is_clean());
        assert!(matches!(
            report.statuses[0].outcome,
            CheckOutcome::MissingLocal
        ));
        assert!(report.failures()[0].starts_with("Missing local contract file:"));
    }

    #[tokio::test]
    async fn upstream_http_error_aborts_the_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/HanzoRazer/code-analysis-tool/main/schemas/run_result.schema.json",
            ))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("run_result.schema.json"), SCHEMA_BODY).unwrap();

        let checker = ContractChecker::new(config_for(&server, &dir)).unwrap();
        let err = checker.check().await.unwrap_err();

        assert!(matches!(err, Error::DownloadFailed(_)));
    }
}
