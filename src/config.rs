//! Server configuration from environment variables.

/// `DATA_FILE` value that selects the in-memory store instead of a file.
pub const IN_MEMORY_DATA_FILE: &str = ":memory:";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    /// Bind address (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Path of the league document (`DATA_FILE`), or `:memory:`.
    pub data_file: String,
    /// Backend base URL handed to the browser client (`BACKEND_URL`). Empty means same origin.
    pub backend_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_data_file() -> String {
    "data.json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            backend_url: String::new(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset or unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or_else(default_port),
            data_file: lookup("DATA_FILE")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(default_data_file),
            backend_url: lookup("BACKEND_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_default(),
        }
    }

    pub fn uses_memory_store(&self) -> bool {
        self.data_file == IN_MEMORY_DATA_FILE
    }
}
