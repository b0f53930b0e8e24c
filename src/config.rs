use crate::error::{Result, ResultsError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Record store selection. With a base URL and key the REST store is used;
/// otherwise the in-memory store (optionally seeded from a JSON fixture).
#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub fixture: Option<String>,
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to an
    /// empty config when the file is absent. Environment variables
    /// `SUPABASE_URL` / `SUPABASE_ANON_KEY` override the file either way.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new("config.toml").exists() {
            Self::load_from_path("config.toml")?
        } else {
            Config::default()
        };
        config.store.apply_env();
        Ok(config)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            ResultsError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

impl StoreConfig {
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SUPABASE_URL") {
            if !url.is_empty() {
                self.base_url = Some(url);
            }
        }
        if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    /// True when both pieces of the remote connection are present.
    pub fn is_remote(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_store_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[store]\nbase_url = \"https://example.supabase.co\"\napi_key = \"anon\""
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(
            config.store.base_url.as_deref(),
            Some("https://example.supabase.co")
        );
        assert!(config.store.is_remote());
        assert!(config.store.fixture.is_none());
    }

    #[test]
    fn empty_config_is_local() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert!(!config.store.is_remote());
    }
}
