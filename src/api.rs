//! Remote Animal Store
//!
//! The `AnimalStore` seam and its HTTP implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::StoreError;
use crate::models::{Animal, AnimalId, CheckupUpdate, NewAnimal};

pub type StoreResult<T> = Result<T, StoreError>;

/// Source of truth for animal records.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait AnimalStore {
    /// Full record set
    async fn list(&self) -> StoreResult<Vec<Animal>>;

    async fn get(&self, id: &AnimalId) -> StoreResult<Animal>;

    async fn create(&self, animal: &NewAnimal) -> StoreResult<Animal>;

    /// Send only the new checkup date
    async fn update_checkup(&self, id: &AnimalId, next_checkup: &str) -> StoreResult<Animal>;

    /// Returns the deleted record when the store echoes it back
    async fn delete(&self, id: &AnimalId) -> StoreResult<Option<Animal>>;
}

/// REST client for `/animals`.
#[derive(Debug, Clone)]
pub struct HttpAnimalStore {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAnimalStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> StoreResult<T> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl AnimalStore for HttpAnimalStore {
    async fn list(&self) -> StoreResult<Vec<Animal>> {
        let url = self.config.collection_url();
        log::debug!("[Api] GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn get(&self, id: &AnimalId) -> StoreResult<Animal> {
        let url = self.config.record_url(id.as_str());
        log::debug!("[Api] GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn create(&self, animal: &NewAnimal) -> StoreResult<Animal> {
        let url = self.config.collection_url();
        log::debug!("[Api] POST {}", url);
        self.send_json(self.client.post(url).json(animal)).await
    }

    async fn update_checkup(&self, id: &AnimalId, next_checkup: &str) -> StoreResult<Animal> {
        let url = self.config.record_url(id.as_str());
        log::debug!("[Api] PUT {}", url);
        let body = CheckupUpdate {
            next_checkup: next_checkup.to_string(),
        };
        self.send_json(self.client.put(url).json(&body)).await
    }

    async fn delete(&self, id: &AnimalId) -> StoreResult<Option<Animal>> {
        let url = self.config.record_url(id.as_str());
        log::debug!("[Api] DELETE {}", url);
        let response = self.client.delete(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        // Some stores answer with a message instead of the record.
        Ok(serde_json::from_str(&body).ok())
    }
}
