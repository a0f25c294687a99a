//! Personal access token endpoints, nested under users.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Token, TokenCreate, TokenCreated};
use crate::pagination::PageIterator;

/// Handle for `/users/{id}/tokens` endpoints.
#[derive(Clone)]
pub struct Tokens {
    http: HttpClient,
}

impl Tokens {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self, user_id: &str) -> PageIterator<Token> {
        PageIterator::new(self.http.clone(), format!("users/{user_id}/tokens"))
    }

    pub async fn get(&self, user_id: &str, token_id: &str) -> Result<Token, ApiError> {
        self.http
            .get(&format!("users/{user_id}/tokens/{token_id}"), &[])
            .await
    }

    /// Creates a token; the plain value is only present in this response.
    pub async fn create(&self, user_id: &str, token: &TokenCreate) -> Result<TokenCreated, ApiError> {
        self.http
            .post(&format!("users/{user_id}/tokens"), token)
            .await
    }

    pub async fn delete(&self, user_id: &str, token_id: &str) -> Result<(), ApiError> {
        self.http
            .delete(&format!("users/{user_id}/tokens/{token_id}"))
            .await
    }
}
