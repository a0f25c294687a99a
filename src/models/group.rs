use serde::{Deserialize, Serialize};

/// A named set of peers used as the unit of policy targeting.
#[derive(Clone, Debug, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub peers_count: u32,
    #[serde(default)]
    pub peers: Vec<serde_json::Value>,
    pub issued: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GroupCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<String>>,
}
