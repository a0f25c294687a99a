//! Top-level client: wires the executor once and hands out resource handles.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, RetryPolicy};
use crate::resources::{
    Accounts, Dns, Events, Groups, Networks, Peers, Policies, Routes, SetupKeys, Tokens, Users,
};

/// Entry point to the API.
///
/// Holds the shared connection pool; resource handles obtained from it reuse
/// the same pool and the same credentials. The client is immutable after
/// construction and safe to clone and share across tasks.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Connects with the default retry policy.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_retry_policy(config, RetryPolicy::default())
    }

    pub fn with_retry_policy(config: ClientConfig, retry: RetryPolicy) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(&config, retry)?,
        })
    }

    /// The underlying executor, for calls to endpoints without a typed
    /// wrapper.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn accounts(&self) -> Accounts {
        Accounts::new(self.http.clone())
    }

    pub fn dns(&self) -> Dns {
        Dns::new(self.http.clone())
    }

    pub fn events(&self) -> Events {
        Events::new(self.http.clone())
    }

    pub fn groups(&self) -> Groups {
        Groups::new(self.http.clone())
    }

    pub fn networks(&self) -> Networks {
        Networks::new(self.http.clone())
    }

    pub fn peers(&self) -> Peers {
        Peers::new(self.http.clone())
    }

    pub fn policies(&self) -> Policies {
        Policies::new(self.http.clone())
    }

    pub fn routes(&self) -> Routes {
        Routes::new(self.http.clone())
    }

    pub fn setup_keys(&self) -> SetupKeys {
        SetupKeys::new(self.http.clone())
    }

    pub fn tokens(&self) -> Tokens {
        Tokens::new(self.http.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.http.clone())
    }
}
