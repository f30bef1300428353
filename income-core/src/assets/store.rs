use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{BracketId, CardAsset};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PartialEq for StoreError {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Configuration(a), Self::Configuration(b)) => a == b,
            (Self::Io { path: a, source: x }, Self::Io { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            _ => false,
        }
    }
}

/// Files a card directory may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFile {
    /// Required; cards without it are skipped.
    Thumbnail,
    /// Required; cards without it are skipped.
    Name,
    CoverImage,
    Details,
}

impl AssetFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Thumbnail => "image.png",
            Self::Name => "name.txt",
            Self::CoverImage => "cover-image.png",
            Self::Details => "details.txt",
        }
    }
}

/// Handle to one card's directory inside a bracket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardDir {
    /// Directory name, used as the card id.
    pub id: String,
    pub path: PathBuf,
}

/// Read-only access to card assets, grouped by bracket.
pub trait CardStore: Send + Sync {
    /// Lists the card directories of `bracket`, sorted by id.
    ///
    /// # Errors
    /// * [`StoreError::NotFound`] when the bracket has no asset directory.
    fn list_card_dirs(
        &self,
        bracket: BracketId,
    ) -> Result<Vec<CardDir>, StoreError>;

    /// Reads one file from a card directory; `Ok(None)` when it does not
    /// exist.
    fn read_asset(
        &self,
        card: &CardDir,
        file: AssetFile,
    ) -> Result<Option<Vec<u8>>, StoreError>;

    /// Loads every displayable card of `bracket`.
    ///
    /// Only a failure to list the bracket is an error. A card whose thumbnail
    /// or name is missing or unreadable is skipped with a warning; an
    /// unreadable cover image or details file is logged and left as `None`.
    fn load_cards(
        &self,
        bracket: BracketId,
    ) -> Result<Vec<CardAsset>, StoreError> {
        let dirs = self.list_card_dirs(bracket)?;
        debug!(%bracket, count = dirs.len(), "listing card directories");

        let mut cards = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let thumbnail = read_or_warn(self, &dir, AssetFile::Thumbnail);
            let name = read_or_warn(self, &dir, AssetFile::Name);

            let (Some(thumbnail), Some(name)) = (thumbnail, name) else {
                warn!(card = %dir.id, "skipping card without image or name");
                continue;
            };

            cards.push(CardAsset {
                id: dir.id.clone(),
                name: String::from_utf8_lossy(&name).trim().to_string(),
                thumbnail,
                cover_image: read_or_warn(self, &dir, AssetFile::CoverImage),
                details: read_or_warn(self, &dir, AssetFile::Details)
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
            });
        }

        Ok(cards)
    }
}

/// [`CardStore::read_asset`] with read errors logged and treated as absent.
fn read_or_warn<S: CardStore + ?Sized>(
    store: &S,
    dir: &CardDir,
    file: AssetFile,
) -> Option<Vec<u8>> {
    store.read_asset(dir, file).unwrap_or_else(|error| {
        warn!(card = %dir.id, file = file.file_name(), %error, "cannot read card asset");
        None
    })
}
