//! Error types for each concern of the application
//!
//! Nothing here is fatal to the process: the worst case is a status banner
//! (delivery) or a placeholder tile (thumbnails).

use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::ProjectId;

/// Problems with the embedded site content
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate project id {0} in catalog")]
    DuplicateId(ProjectId),

    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Problems loading the TOML configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure of the external message-delivery call
///
/// Cloneable so it can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("delivery is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("could not reach delivery service: {0}")]
    Transport(String),

    #[error("delivery service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Transport(err.to_string())
    }
}

/// Failure while fetching or caching a project thumbnail
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("image server answered {0}")]
    Status(u16),

    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
