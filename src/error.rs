use std::path::PathBuf;
use thiserror::Error;

/// Failures from resolving the network selectors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    #[error(
        "Multiple networks parameters (testnet, simnet, devnet, etc.) cannot be used together. Please choose only one network"
    )]
    ConflictingNetworkSelection,

    #[error("Mainnet has not launched yet, use --testnet to run in testnet mode")]
    NoNetworkSelected,
}

impl NetworkError {
    /// Whether the diagnostic for this error should be followed by the CLI help text.
    pub fn wants_help(&self) -> bool {
        matches!(self, NetworkError::ConflictingNetworkSelection)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown output mode '{0}'. available: text, toml")]
    UnknownOutputMode(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}
