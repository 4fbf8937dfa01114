use crate::products::parse_cards;
use crate::traits::CardSource;
use async_trait::async_trait;
use carousel_core::{CarouselError, CarouselResult};
use carousel_domain::CardRecord;
use std::path::{Path, PathBuf};

/// Reads cards from a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CardSource for JsonFileSource {
    async fn fetch(&self) -> CarouselResult<Vec<CardRecord>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CarouselError::NotFound(self.path.display().to_string())
            } else {
                CarouselError::Io(e)
            }
        })?;

        let cards = parse_cards(&bytes)?;
        tracing::info!(
            "Loaded {} cards from {}",
            cards.len(),
            self.path.display()
        );
        Ok(cards)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
