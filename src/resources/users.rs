//! User management endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{User, UserCreate, UserUpdate};
use crate::pagination::PageIterator;

/// Handle for `/users` endpoints.
#[derive(Clone)]
pub struct Users {
    http: HttpClient,
}

impl Users {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Lists all account users.
    pub fn list(&self) -> PageIterator<User> {
        PageIterator::new(self.http.clone(), "users")
    }

    pub async fn get(&self, user_id: &str) -> Result<User, ApiError> {
        self.http.get(&format!("users/{user_id}"), &[]).await
    }

    /// The user the configured token belongs to.
    pub async fn get_current(&self) -> Result<User, ApiError> {
        self.http.get("users/current", &[]).await
    }

    pub async fn create(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.http.post("users", user).await
    }

    pub async fn update(&self, user_id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        self.http.put(&format!("users/{user_id}"), update).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("users/{user_id}")).await
    }
}
