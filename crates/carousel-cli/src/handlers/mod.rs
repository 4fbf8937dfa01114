pub mod inspect;
pub mod simulate;

use carousel_domain::CardRecord;
use carousel_source::{CardSource, JsonFileSource};
use std::path::Path;

async fn load_cards(path: &Path) -> anyhow::Result<Vec<CardRecord>> {
    Ok(JsonFileSource::new(path).fetch().await?)
}
