//! Account endpoints. Every installation exposes exactly one account.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Account, AccountUpdate};
use crate::pagination::PageIterator;

/// Handle for `/accounts` endpoints.
#[derive(Clone)]
pub struct Accounts {
    http: HttpClient,
}

impl Accounts {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Lists accounts; the listing always holds exactly one entry.
    pub fn list(&self) -> PageIterator<Account> {
        PageIterator::new(self.http.clone(), "accounts")
    }

    pub async fn update(&self, account_id: &str, update: &AccountUpdate) -> Result<Account, ApiError> {
        self.http.put(&format!("accounts/{account_id}"), update).await
    }

    pub async fn delete(&self, account_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("accounts/{account_id}")).await
    }
}
