//! Group management endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Group, GroupCreate, GroupUpdate};
use crate::pagination::PageIterator;

/// Handle for `/groups` endpoints.
#[derive(Clone)]
pub struct Groups {
    http: HttpClient,
}

impl Groups {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> PageIterator<Group> {
        PageIterator::new(self.http.clone(), "groups")
    }

    pub async fn get(&self, group_id: &str) -> Result<Group, ApiError> {
        self.http.get(&format!("groups/{group_id}"), &[]).await
    }

    pub async fn create(&self, group: &GroupCreate) -> Result<Group, ApiError> {
        self.http.post("groups", group).await
    }

    pub async fn update(&self, group_id: &str, update: &GroupUpdate) -> Result<Group, ApiError> {
        self.http.put(&format!("groups/{group_id}"), update).await
    }

    pub async fn delete(&self, group_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("groups/{group_id}")).await
    }
}
