use serde::{Deserialize, Serialize};

use super::common::NetworkType;

/// A network route advertised through a routing peer or peer group.
#[derive(Clone, Debug, Deserialize)]
pub struct Route {
    pub id: String,
    pub network_id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    pub peer: Option<String>,
    pub peer_groups: Option<Vec<String>>,
    pub network: Option<String>,
    pub network_type: Option<NetworkType>,
    #[serde(default)]
    pub metric: u32,
    #[serde(default)]
    pub masquerade: bool,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RouteCreate {
    pub network_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_groups: Option<Vec<String>>,
    pub network: String,
    pub metric: u32,
    pub masquerade: bool,
    pub groups: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RouteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masquerade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}
