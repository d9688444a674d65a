use super::{DataStore, WALL_ENTRY};
use crate::error::{FanbrickError, Result};
use crate::model::Brick;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", WALL_ENTRY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FanbrickError::Io)?;
        }
        Ok(())
    }

    fn write_entry(&self, bricks: &[Brick]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.entry_path();
        let content = serde_json::to_string_pretty(bricks).map_err(FanbrickError::Serialization)?;

        // Write to a sibling file first so a crash never leaves half an entry.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(FanbrickError::Io)?;
        fs::rename(&tmp, &path).map_err(FanbrickError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Brick>>> {
        let path = self.entry_path();
        if !path.exists() {
            debug!(path = %path.display(), "no stored wall");
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(FanbrickError::Io)?;
        let bricks: Vec<Brick> =
            serde_json::from_str(&content).map_err(FanbrickError::Serialization)?;
        debug!(path = %path.display(), count = bricks.len(), "loaded wall");
        Ok(Some(bricks))
    }

    fn save(&mut self, bricks: &[Brick]) -> Result<()> {
        let path = self.entry_path();
        self.write_entry(bricks).map_err(|e| {
            FanbrickError::Persistence(format!("could not write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), count = bricks.len(), "saved wall");
        Ok(())
    }
}
