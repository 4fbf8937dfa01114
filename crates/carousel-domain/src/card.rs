use serde::{Deserialize, Serialize};

pub type CardId = u64;

/// Shown when a product has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x300?text=No+Image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl CardRecord {
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}
