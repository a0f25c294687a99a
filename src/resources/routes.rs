//! Network route endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Route, RouteCreate, RouteUpdate};
use crate::pagination::PageIterator;

/// Handle for `/routes` endpoints.
#[derive(Clone)]
pub struct Routes {
    http: HttpClient,
}

impl Routes {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> PageIterator<Route> {
        PageIterator::new(self.http.clone(), "routes")
    }

    pub async fn get(&self, route_id: &str) -> Result<Route, ApiError> {
        self.http.get(&format!("routes/{route_id}"), &[]).await
    }

    pub async fn create(&self, route: &RouteCreate) -> Result<Route, ApiError> {
        self.http.post("routes", route).await
    }

    pub async fn update(&self, route_id: &str, update: &RouteUpdate) -> Result<Route, ApiError> {
        self.http.put(&format!("routes/{route_id}"), update).await
    }

    pub async fn delete(&self, route_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("routes/{route_id}")).await
    }
}
