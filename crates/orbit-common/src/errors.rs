use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to produce pixels for a single menu item image.
///
/// Never fatal: the atlas leaves the affected cell blank.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to fetch {source_uri}: {reason}")]
    Fetch { source_uri: String, reason: String },

    #[error("failed to decode {source_uri}: {reason}")]
    Decode { source_uri: String, reason: String },

    #[error("failed to read {source_uri}: {source}")]
    Io {
        source_uri: String,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out loading {source_uri} after {after_ms} ms")]
    Timeout { source_uri: String, after_ms: u64 },
}

/// Errors that stop the host application.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
