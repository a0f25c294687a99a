//! DNS endpoints: nameserver groups and account DNS settings.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{DnsSettings, NameserverGroup, NameserverGroupRequest};
use crate::pagination::PageIterator;

/// Handle for `/dns` endpoints.
#[derive(Clone)]
pub struct Dns {
    http: HttpClient,
}

impl Dns {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list_nameserver_groups(&self) -> PageIterator<NameserverGroup> {
        PageIterator::new(self.http.clone(), "dns/nameservers")
    }

    pub async fn get_nameserver_group(&self, group_id: &str) -> Result<NameserverGroup, ApiError> {
        self.http.get(&format!("dns/nameservers/{group_id}"), &[]).await
    }

    pub async fn create_nameserver_group(
        &self,
        group: &NameserverGroupRequest,
    ) -> Result<NameserverGroup, ApiError> {
        self.http.post("dns/nameservers", group).await
    }

    pub async fn update_nameserver_group(
        &self,
        group_id: &str,
        group: &NameserverGroupRequest,
    ) -> Result<NameserverGroup, ApiError> {
        self.http
            .put(&format!("dns/nameservers/{group_id}"), group)
            .await
    }

    pub async fn delete_nameserver_group(&self, group_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("dns/nameservers/{group_id}")).await
    }

    pub async fn get_settings(&self) -> Result<DnsSettings, ApiError> {
        self.http.get("dns/settings", &[]).await
    }

    pub async fn update_settings(&self, settings: &DnsSettings) -> Result<DnsSettings, ApiError> {
        self.http.put("dns/settings", settings).await
    }
}
