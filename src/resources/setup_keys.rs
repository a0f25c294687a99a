//! Setup key endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{SetupKey, SetupKeyCreate, SetupKeyUpdate};
use crate::pagination::PageIterator;

/// Handle for `/setup-keys` endpoints.
#[derive(Clone)]
pub struct SetupKeys {
    http: HttpClient,
}

impl SetupKeys {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> PageIterator<SetupKey> {
        PageIterator::new(self.http.clone(), "setup-keys")
    }

    pub async fn get(&self, key_id: &str) -> Result<SetupKey, ApiError> {
        self.http.get(&format!("setup-keys/{key_id}"), &[]).await
    }

    pub async fn create(&self, key: &SetupKeyCreate) -> Result<SetupKey, ApiError> {
        self.http.post("setup-keys", key).await
    }

    /// Revocation goes through here with `revoked: Some(true)`.
    pub async fn update(&self, key_id: &str, update: &SetupKeyUpdate) -> Result<SetupKey, ApiError> {
        self.http.put(&format!("setup-keys/{key_id}"), update).await
    }

    pub async fn delete(&self, key_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("setup-keys/{key_id}")).await
    }
}
