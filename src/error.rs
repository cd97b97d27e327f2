use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("Download failed: {0}")]
	DownloadFailed(String),

	#[error("Write failed: {0}")]
	WriteFailed(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
