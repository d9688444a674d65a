use crate::error::{FanbrickError, Result};
use crate::model::DEFAULT_AUTHOR_EMAIL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for fanbrick, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanbrickConfig {
    /// Email recorded as the author of new bricks. Only the part before `@` is shown.
    #[serde(default = "default_author_email")]
    pub author_email: String,

    /// Seed a fresh wall with the three demo bricks
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_author_email() -> String {
    DEFAULT_AUTHOR_EMAIL.to_string()
}

fn default_seed_demo() -> bool {
    true
}

impl Default for FanbrickConfig {
    fn default() -> Self {
        Self {
            author_email: default_author_email(),
            seed_demo: default_seed_demo(),
        }
    }
}

/// Keys accepted by `fanbrick config <key> [value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    AuthorEmail,
    SeedDemo,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::AuthorEmail, ConfigKey::SeedDemo];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::AuthorEmail => "author-email",
            ConfigKey::SeedDemo => "seed-demo",
        }
    }

    pub fn parse(key: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| FanbrickError::Config(format!("Unknown config key: {}", key)))
    }
}

impl FanbrickConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FanbrickError::Io)?;
        let config: FanbrickConfig =
            serde_json::from_str(&content).map_err(FanbrickError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FanbrickError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(FanbrickError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(FanbrickError::Io)?;
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::AuthorEmail => self.author_email.clone(),
            ConfigKey::SeedDemo => self.seed_demo.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::AuthorEmail => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(FanbrickError::Config("author-email cannot be empty".into()));
                }
                self.author_email = value.to_string();
            }
            ConfigKey::SeedDemo => {
                self.seed_demo = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(FanbrickError::Config(format!(
                            "seed-demo expects true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
        }
        Ok(())
    }
}
