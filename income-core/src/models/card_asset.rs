use std::fmt;

/// A card read from the asset store.
///
/// Image fields hold the encoded file bytes (PNG); decoding is left to the UI.
#[derive(Clone, PartialEq, Eq)]
pub struct CardAsset {
    /// Name of the card's directory; stable across loads.
    pub id: String,
    pub name: String,
    pub thumbnail: Vec<u8>,
    pub cover_image: Option<Vec<u8>>,
    pub details: Option<String>,
}

impl fmt::Debug for CardAsset {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("CardAsset")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("thumbnail", &format_args!("{} bytes", self.thumbnail.len()))
            .field(
                "cover_image",
                &self.cover_image.as_ref().map(|c| c.len()),
            )
            .field("details", &self.details)
            .finish()
    }
}
