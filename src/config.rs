use clap::Parser;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::selection::{NetworkSelection, ResolvedNetwork};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Text,
    Toml,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Text => write!(f, "text"),
            OutputMode::Toml => write!(f, "toml"),
        }
    }
}

fn parse_output_mode(s: &str) -> Result<OutputMode, ConfigError> {
    match s {
        "text" => Ok(OutputMode::Text),
        "toml" => Ok(OutputMode::Toml),
        _ => Err(ConfigError::UnknownOutputMode(s.to_string())),
    }
}

/// Resolve the network a node should run against.
#[derive(Debug, Parser)]
#[command(name = "netselect")]
#[command(about = "Selects exactly one network profile from mutually exclusive flags")]
pub struct Cli {
    #[command(flatten)]
    pub network: NetworkSelection,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output mode: text, toml
    #[arg(long, value_name = "MODE")]
    pub output: Option<String>,

    /// Log verbosity: 0 (off) to 5 (trace)
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub verbosity: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub network: NetworkSelection,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub mode: OutputMode,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<FileConfig>(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved configuration after merging TOML file + CLI overrides.
#[derive(Debug)]
pub struct AppConfig {
    pub config_path: Option<PathBuf>,
    pub network: ResolvedNetwork,
    pub output_mode: OutputMode,
}

impl AppConfig {
    /// Build the final config: defaults -> file values -> CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut file_cfg = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        // CLI overrides. Any selector flag on the command line replaces the
        // file's selectors as a whole.
        if cli.network.any_selected() {
            if file_cfg.network.any_selected() && file_cfg.network != cli.network {
                tracing::debug!("command-line network flags override config file");
            }
            file_cfg.network = cli.network;
        }
        if let Some(ref m) = cli.output {
            file_cfg.output.mode = parse_output_mode(m)?;
        }

        let network = file_cfg.network.resolve()?;

        Ok(Self {
            config_path: cli.config.clone(),
            network,
            output_mode: file_cfg.output.mode,
        })
    }
}
