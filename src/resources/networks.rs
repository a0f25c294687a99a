//! Network endpoints, including nested resources and routers.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{
    Network, NetworkCreate, NetworkResource, NetworkResourceRequest, NetworkRouter,
    NetworkRouterRequest, NetworkUpdate,
};
use crate::pagination::PageIterator;

/// Handle for `/networks` endpoints.
#[derive(Clone)]
pub struct Networks {
    http: HttpClient,
}

impl Networks {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> PageIterator<Network> {
        PageIterator::new(self.http.clone(), "networks")
    }

    pub async fn get(&self, network_id: &str) -> Result<Network, ApiError> {
        self.http.get(&format!("networks/{network_id}"), &[]).await
    }

    pub async fn create(&self, network: &NetworkCreate) -> Result<Network, ApiError> {
        self.http.post("networks", network).await
    }

    pub async fn update(&self, network_id: &str, update: &NetworkUpdate) -> Result<Network, ApiError> {
        self.http.put(&format!("networks/{network_id}"), update).await
    }

    pub async fn delete(&self, network_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("networks/{network_id}")).await
    }

    // Nested resources.

    pub fn list_resources(&self, network_id: &str) -> PageIterator<NetworkResource> {
        PageIterator::new(self.http.clone(), format!("networks/{network_id}/resources"))
    }

    pub async fn get_resource(
        &self,
        network_id: &str,
        resource_id: &str,
    ) -> Result<NetworkResource, ApiError> {
        self.http
            .get(&format!("networks/{network_id}/resources/{resource_id}"), &[])
            .await
    }

    pub async fn create_resource(
        &self,
        network_id: &str,
        resource: &NetworkResourceRequest,
    ) -> Result<NetworkResource, ApiError> {
        self.http
            .post(&format!("networks/{network_id}/resources"), resource)
            .await
    }

    pub async fn update_resource(
        &self,
        network_id: &str,
        resource_id: &str,
        resource: &NetworkResourceRequest,
    ) -> Result<NetworkResource, ApiError> {
        self.http
            .put(
                &format!("networks/{network_id}/resources/{resource_id}"),
                resource,
            )
            .await
    }

    pub async fn delete_resource(&self, network_id: &str, resource_id: &str) -> Result<(), ApiError> {
        self.http
            .delete(&format!("networks/{network_id}/resources/{resource_id}"))
            .await
    }

    // Nested routers.

    pub fn list_routers(&self, network_id: &str) -> PageIterator<NetworkRouter> {
        PageIterator::new(self.http.clone(), format!("networks/{network_id}/routers"))
    }

    pub async fn get_router(
        &self,
        network_id: &str,
        router_id: &str,
    ) -> Result<NetworkRouter, ApiError> {
        self.http
            .get(&format!("networks/{network_id}/routers/{router_id}"), &[])
            .await
    }

    pub async fn create_router(
        &self,
        network_id: &str,
        router: &NetworkRouterRequest,
    ) -> Result<NetworkRouter, ApiError> {
        self.http
            .post(&format!("networks/{network_id}/routers"), router)
            .await
    }

    pub async fn update_router(
        &self,
        network_id: &str,
        router_id: &str,
        router: &NetworkRouterRequest,
    ) -> Result<NetworkRouter, ApiError> {
        self.http
            .put(
                &format!("networks/{network_id}/routers/{router_id}"),
                router,
            )
            .await
    }

    pub async fn delete_router(&self, network_id: &str, router_id: &str) -> Result<(), ApiError> {
        self.http
            .delete(&format!("networks/{network_id}/routers/{router_id}"))
            .await
    }
}
