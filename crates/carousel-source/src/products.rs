//! Card documents: either a bare array of cards, or a product listing of the
//! form `{ "products": [{ "id", "title", "description", "images": [...] }] }`.

use carousel_core::{CarouselError, CarouselResult};
use carousel_domain::{CardRecord, PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<Product> for CardRecord {
    fn from(product: Product) -> Self {
        let image = product
            .images
            .into_iter()
            .next()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        CardRecord::new(product.id, product.title, product.description, image)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Parses a card document. A well-formed document that holds no product list
/// yields no cards rather than an error.
pub fn parse_cards(bytes: &[u8]) -> CarouselResult<Vec<CardRecord>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CarouselError::Serialization(e.to_string()))?;

    if value.is_array() {
        return serde_json::from_value(value)
            .map_err(|e| CarouselError::Serialization(e.to_string()));
    }

    if value.get("products").is_some_and(|products| products.is_array()) {
        let response: ProductsResponse = serde_json::from_value(value)
            .map_err(|e| CarouselError::Serialization(e.to_string()))?;
        return Ok(response.products.into_iter().map(CardRecord::from).collect());
    }

    tracing::warn!("Card document has no product list; showing no cards");
    Ok(Vec::new())
}
