/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_media_folder")]
    pub media_folder: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = std::path::PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with REVERB_);
        // "__" separates nesting levels so field names may contain "_"
        settings = settings.add_source(
            config::Environment::with_prefix("REVERB")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.media_folder.is_empty() {
            return Err(ServerError::Config(
                "media folder is required (set REVERB_STORAGE__MEDIA_FOLDER)".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolved display form of the configured media folder
    ///
    /// The first `~` is replaced with the current user's home directory and
    /// trailing path separators are trimmed. If the home directory cannot be
    /// resolved the raw value is used as-is; this path never fails a request.
    pub fn media(&self) -> String {
        let raw = &self.storage.media_folder;

        let resolved = match dirs::home_dir() {
            Some(home) => raw.replacen('~', &home.to_string_lossy(), 1),
            None => {
                tracing::warn!("could not resolve home directory, using raw media folder path");
                raw.clone()
            }
        };

        resolved.trim_end_matches(['/', '\\']).to_string()
    }
}

/// Source of the server configuration
///
/// The Subsonic surface reports configuration failures inside its payload, so
/// handlers consume configuration through this seam rather than a one-time
/// snapshot baked into the router.
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> Result<ServerConfig>;
}

/// Config source serving an already-loaded snapshot
pub struct StaticConfig(ServerConfig);

impl StaticConfig {
    pub fn new(config: ServerConfig) -> Self {
        Self(config)
    }
}

impl ConfigSource for StaticConfig {
    fn load(&self) -> Result<ServerConfig> {
        Ok(self.0.clone())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8200
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        media_folder: default_media_folder(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/reverb.db".to_string()
}

fn default_media_folder() -> String {
    "~/Music".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}
