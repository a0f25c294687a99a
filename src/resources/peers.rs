//! Peer management endpoints.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Peer, PeerUpdate};
use crate::pagination::PageIterator;

/// Handle for `/peers` endpoints.
#[derive(Clone)]
pub struct Peers {
    http: HttpClient,
}

impl Peers {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Lists peers. Filter with the iterator's query builder:
    ///
    /// ```no_run
    /// # async fn run(client: netbird::Client) -> Result<(), netbird::ApiError> {
    /// let mut peers = client.peers().list().with_query("name", "server-01");
    /// while let Some(peer) = peers.try_next().await? {
    ///     println!("{} ({})", peer.name, peer.ip);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> PageIterator<Peer> {
        PageIterator::new(self.http.clone(), "peers")
    }

    pub async fn get(&self, peer_id: &str) -> Result<Peer, ApiError> {
        self.http.get(&format!("peers/{peer_id}"), &[]).await
    }

    pub async fn update(&self, peer_id: &str, update: &PeerUpdate) -> Result<Peer, ApiError> {
        self.http.put(&format!("peers/{peer_id}"), update).await
    }

    pub async fn delete(&self, peer_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("peers/{peer_id}")).await
    }

    /// Peers the given peer is allowed to connect to.
    pub fn accessible_peers(&self, peer_id: &str) -> PageIterator<Peer> {
        PageIterator::new(
            self.http.clone(),
            format!("peers/{peer_id}/accessible-peers"),
        )
    }
}
