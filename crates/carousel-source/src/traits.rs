use async_trait::async_trait;
use carousel_core::CarouselResult;
use carousel_domain::CardRecord;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Supplies the list of cards to show.
///
/// An empty list is a valid answer; failures are reported as errors and it is
/// up to the caller how to present them.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch(&self) -> CarouselResult<Vec<CardRecord>>;

    /// Human readable origin, e.g. a path or URL.
    fn describe(&self) -> String;
}

/// A watched card file was written to.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub detected_at: DateTime<Utc>,
}
