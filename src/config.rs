use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Harness configuration loaded from harness.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub paths: PathsConfig,
    pub algod: NodeConfig,
    pub indexer: NodeConfig,
    #[serde(default)]
    pub signer: SignerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory that program fixtures are resolved against
    pub resources: PathBuf,
}

/// Connection settings for an algod or indexer endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub url: String,
    pub token: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Hex-encoded 32-byte ed25519 seed
    pub seed_hex: Option<String>,
}

pub const DEFAULT_RESOURCES_DIR: &str = "tests/features/resources";

impl NodeConfig {
    pub fn algod_default() -> Self {
        Self {
            url: "http://localhost:4001".to_string(),
            token: String::new(),
            timeout_seconds: 30,
        }
    }

    pub fn indexer_default() -> Self {
        Self {
            url: "http://localhost:8980".to_string(),
            token: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                resources: PathBuf::from(DEFAULT_RESOURCES_DIR),
            },
            algod: NodeConfig::algod_default(),
            indexer: NodeConfig::indexer_default(),
            signer: SignerConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from harness.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("harness"))
    }

    /// Same as [`HarnessConfig::load`] but with an explicit config file stem or path
    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        let algod = NodeConfig::algod_default();
        let indexer = NodeConfig::indexer_default();
        let config = Config::builder()
            .set_default("paths.resources", DEFAULT_RESOURCES_DIR)?
            .set_default("algod.url", algod.url)?
            .set_default("algod.token", algod.token)?
            .set_default("algod.timeout_seconds", algod.timeout_seconds)?
            .set_default("indexer.url", indexer.url)?
            .set_default("indexer.token", indexer.token)?
            .set_default("indexer.timeout_seconds", indexer.timeout_seconds)?
            .add_source(File::from(file).required(false))
            // ALGO_HARNESS_ALGOD__URL, ALGO_HARNESS_SIGNER__SEED_HEX, ...
            .add_source(
                config::Environment::with_prefix("ALGO_HARNESS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get config values for CLI argument defaults, falling back to built-ins
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}
