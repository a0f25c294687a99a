use serde::{Deserialize, Serialize};

/// A logical network grouping resources and routers.
#[derive(Clone, Debug, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub routers: Vec<String>,
    #[serde(default)]
    pub routing_peers_count: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct NetworkCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NetworkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An address or domain reachable through a network.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkResource {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub groups: Vec<serde_json::Value>,
}

/// Create/update payload for a network resource.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkResourceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub address: String,
    pub enabled: bool,
    pub groups: Vec<String>,
}

/// A peer (or peer group) routing traffic into a network.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkRouter {
    pub id: String,
    pub peer: Option<String>,
    pub peer_groups: Option<Vec<String>>,
    #[serde(default)]
    pub metric: u32,
    #[serde(default)]
    pub masquerade: bool,
    #[serde(default)]
    pub enabled: bool,
}

/// Create/update payload for a network router.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NetworkRouterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_groups: Option<Vec<String>>,
    pub metric: u32,
    pub masquerade: bool,
    pub enabled: bool,
}
