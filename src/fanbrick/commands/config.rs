use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, FanbrickConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = FanbrickConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key.as_str(),
                config.get(key)
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key.as_str(),
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set(ConfigKey::AuthorEmail, "ultra@inter.it".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey(ConfigKey::AuthorEmail)).unwrap();
        assert_eq!(result.messages[0].content, "author-email = ultra@inter.it");
        assert_eq!(result.config.unwrap().author_email, "ultra@inter.it");
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::Set(ConfigKey::SeedDemo, "later".into())).is_err());
        assert!(!FanbrickConfig::exists(dir.path()));
    }
}
