//! Activity and traffic event endpoints. Read-only and, unlike most of the
//! API, served in paginated envelopes.

use crate::http::HttpClient;
use crate::models::{AuditEvent, NetworkTrafficEvent};
use crate::pagination::PageIterator;

/// Handle for `/events` endpoints.
#[derive(Clone)]
pub struct Events {
    http: HttpClient,
}

impl Events {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The account activity log, newest first.
    pub fn audit(&self) -> PageIterator<AuditEvent> {
        PageIterator::new(self.http.clone(), "events/audit")
    }

    /// Observed traffic flows.
    pub fn network_traffic(&self) -> PageIterator<NetworkTrafficEvent> {
        PageIterator::new(self.http.clone(), "events/network-traffic")
    }
}
