use crate::commands::{CmdMessage, CmdResult};
use crate::config::FanbrickConfig;
use crate::error::{FanbrickError, Result};
use std::path::Path;

/// Creates the data directory and a default config if they are missing.
pub fn run(data_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir).map_err(FanbrickError::Io)?;
    }

    if FanbrickConfig::exists(data_dir) {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            data_dir.display()
        )));
        return Ok(result.with_config(FanbrickConfig::load(data_dir)?));
    }

    let config = FanbrickConfig::default();
    config.save(data_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized fanbrick at {}",
        data_dir.display()
    )));
    Ok(result.with_config(config))
}
