//! Typed async client for the NetBird management REST API.
//!
//! Every resource operation funnels through one request pipeline:
//! authenticated dispatch over a shared connection pool, classification of
//! failures into a typed [`ApiError`], bounded retry with backoff for
//! transient kinds, and lazy [`PageIterator`] pagination for list endpoints.
//!
//! ```no_run
//! use netbird::{Client, ClientConfig};
//!
//! # async fn run() -> Result<(), netbird::ApiError> {
//! let config = ClientConfig::new("api.netbird.io", "nbp_mytoken")?;
//! let client = Client::new(config)?;
//!
//! let mut peers = client.peers().list();
//! while let Some(peer) = peers.try_next().await? {
//!     println!("{} ({}) connected={}", peer.name, peer.ip, peer.connected);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod pagination;
pub mod resources;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind};
pub use http::{HttpClient, RequestSpec, RetryPolicy};
pub use pagination::{PageCursor, PageIterator};
