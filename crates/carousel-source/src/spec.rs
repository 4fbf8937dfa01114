use crate::http::HttpSource;
use crate::json_file::JsonFileSource;
use crate::traits::CardSource;
use carousel_core::{CarouselResult, SourceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Where cards come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Url(String),
}

impl SourceSpec {
    /// An explicit file wins over an explicit URL; with neither, the configured URL is used.
    pub fn resolve(file: Option<PathBuf>, url: Option<String>, config: &SourceConfig) -> Self {
        match (file, url) {
            (Some(path), _) => SourceSpec::File(path),
            (None, Some(url)) => SourceSpec::Url(url),
            (None, None) => SourceSpec::Url(config.url.clone()),
        }
    }

    pub fn open(&self, config: &SourceConfig) -> CarouselResult<Arc<dyn CardSource>> {
        match self {
            SourceSpec::File(path) => Ok(Arc::new(JsonFileSource::new(path))),
            SourceSpec::Url(url) => Ok(Arc::new(HttpSource::new(
                url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?)),
        }
    }

    /// Path to watch for changes, if any.
    pub fn watch_path(&self) -> Option<&PathBuf> {
        match self {
            SourceSpec::File(path) => Some(path),
            SourceSpec::Url(_) => None,
        }
    }
}
