use serde::{Deserialize, Serialize};

/// A machine enrolled in the network.
#[derive(Clone, Debug, Deserialize)]
pub struct Peer {
    pub id: String,
    pub name: String,
    pub ip: String,
    #[serde(default)]
    pub connected: bool,
    pub last_seen: Option<String>,
    pub os: Option<String>,
    pub version: Option<String>,
    pub hostname: Option<String>,
    pub user_id: Option<String>,
    pub dns_label: Option<String>,
    #[serde(default)]
    pub ssh_enabled: bool,
    #[serde(default)]
    pub approved: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PeerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_expiration_enabled: Option<bool>,
}
