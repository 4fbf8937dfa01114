use crate::products::parse_cards;
use crate::traits::CardSource;
use async_trait::async_trait;
use carousel_core::{CarouselError, CarouselResult};
use carousel_domain::CardRecord;
use std::time::Duration;

/// Fetches a product listing over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> CarouselResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CarouselError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CardSource for HttpSource {
    async fn fetch(&self) -> CarouselResult<Vec<CardRecord>> {
        tracing::debug!("Fetching cards from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CarouselError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Card request to {} failed with {}", self.url, status);
            return Err(CarouselError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CarouselError::Transport(e.to_string()))?;
        let cards = parse_cards(&body)?;
        tracing::info!("Loaded {} cards from {}", cards.len(), self.url);
        Ok(cards)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
