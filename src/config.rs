use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which [`configure`](crate::options::ParsedOptions::configure)
/// publishes the database settings path.
pub const DATABASE_CONFIG_KEY: &str = "config/database";

/// File name probed inside the user config root.
const DATABASE_CONFIG_FILE: &str = "database.yml";

/// Fallback when the user config root carries no database settings.
const DEFAULT_DATABASE_CONFIG: &str = "config/database.yml";

/// String-keyed settings mapping consumed by the console runtime.
///
/// The launcher writes exactly one key into it (`config/database`); the
/// embedding application owns everything else.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    settings: BTreeMap<String, String>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Per-user configuration directory, `~/.opconsole`.
///
/// `None` when the platform reports no home directory.
pub fn user_config_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".opconsole"))
}

/// Database settings path used when `-y` is not given: the config root's
/// `database.yml` when it exists, else the bundled relative default.
///
/// Touches the filesystem once, for the existence check.
pub fn default_database_config(config_root: Option<&Path>) -> PathBuf {
    if let Some(root) = config_root {
        let user_yaml = root.join(DATABASE_CONFIG_FILE);
        if user_yaml.exists() {
            return user_yaml;
        }
    }

    PathBuf::from(DEFAULT_DATABASE_CONFIG)
}
