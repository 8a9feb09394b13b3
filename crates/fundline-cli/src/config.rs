use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Store file used when neither the flag nor the config file names one.
pub const DEFAULT_STORE_PATH: &str = ".fundline/state.json";

/// Optional TOML configuration for the CLI.
///
/// ```toml
/// store_path = "/var/lib/fundline/state.json"
/// seed_identities = ["alice", "bob"]
/// ```
///
/// Command-line flags win over config file values.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CliConfig {
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub seed_identities: Vec<String>,
}

impl CliConfig {
    /// Load the config file if one was given; otherwise defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("cannot parse config file {}", path.display()))
    }

    /// Effective store path: flag, then config file, then the default.
    pub fn resolve_store_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_path_yields_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert!(config.store_path.is_none());
        assert!(config.seed_identities.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fundline.toml");
        std::fs::write(
            &path,
            r#"
store_path = "/var/lib/fundline/state.json"
seed_identities = ["alice", "bob"]
"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.store_path,
            Some(PathBuf::from("/var/lib/fundline/state.json"))
        );
        assert_eq!(config.seed_identities, vec!["alice", "bob"]);
    }

    #[test]
    fn seed_identities_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fundline.toml");
        std::fs::write(&path, r#"store_path = "s.json""#).unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.seed_identities.is_empty());
    }

    #[test]
    fn unreadable_config_is_an_error() {
        assert!(CliConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn flag_wins_over_config_value() {
        let config = CliConfig {
            store_path: Some(PathBuf::from("from-config.json")),
            seed_identities: vec![],
        };
        let resolved = config.resolve_store_path(Some(Path::new("from-flag.json")));
        assert_eq!(resolved, PathBuf::from("from-flag.json"));
    }

    #[test]
    fn default_store_path_applies_last() {
        let config = CliConfig::default();
        assert_eq!(
            config.resolve_store_path(None),
            PathBuf::from(DEFAULT_STORE_PATH)
        );
    }
}
