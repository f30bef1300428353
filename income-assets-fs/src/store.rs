use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use income_core::BracketId;
use income_core::assets::{AssetFile, CardDir, CardStore, StoreConfig, StoreError};
use tracing::debug;

/// [`CardStore`] reading straight from disk on every call.
pub struct FsCardStore {
    config: StoreConfig,
}

impl FsCardStore {
    /// Opens the store rooted at `config.root`.
    ///
    /// # Errors
    /// * [`StoreError::NotFound`] when the root is not a directory.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        if !config.root.is_dir() {
            return Err(StoreError::NotFound(format!(
                "asset root '{}' is not a directory",
                config.root.display()
            )));
        }
        Ok(Self { config })
    }
}

fn io_error(
    path: &Path,
    source: std::io::Error,
) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl CardStore for FsCardStore {
    fn list_card_dirs(
        &self,
        bracket: BracketId,
    ) -> Result<Vec<CardDir>, StoreError> {
        let bracket_path = self.config.path_for(bracket);
        if !bracket_path.is_dir() {
            return Err(StoreError::NotFound(format!(
                "no asset directory for bracket {bracket} at '{}'",
                bracket_path.display()
            )));
        }

        let entries = fs::read_dir(&bracket_path).map_err(|e| io_error(&bracket_path, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&bracket_path, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            dirs.push(CardDir {
                id: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }
        dirs.sort();

        debug!(%bracket, path = %bracket_path.display(), count = dirs.len(), "read bracket directory");
        Ok(dirs)
    }

    fn read_asset(
        &self,
        card: &CardDir,
        file: AssetFile,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        let path = card.path.join(file.file_name());
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}
