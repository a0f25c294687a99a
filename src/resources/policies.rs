//! Access-control policy endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Policy, PolicyCreate};
use crate::pagination::PageIterator;

/// Handle for `/policies` endpoints.
#[derive(Clone)]
pub struct Policies {
    http: HttpClient,
}

impl Policies {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> PageIterator<Policy> {
        PageIterator::new(self.http.clone(), "policies")
    }

    pub async fn get(&self, policy_id: &str) -> Result<Policy, ApiError> {
        self.http.get(&format!("policies/{policy_id}"), &[]).await
    }

    pub async fn create(&self, policy: &PolicyCreate) -> Result<Policy, ApiError> {
        self.http.post("policies", policy).await
    }

    /// The API replaces the whole policy on update, so the create payload is
    /// reused here.
    pub async fn update(&self, policy_id: &str, policy: &PolicyCreate) -> Result<Policy, ApiError> {
        self.http.put(&format!("policies/{policy_id}"), policy).await
    }

    pub async fn delete(&self, policy_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("policies/{policy_id}")).await
    }
}
