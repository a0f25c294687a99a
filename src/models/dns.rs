use serde::{Deserialize, Serialize};

/// A set of nameservers distributed to groups of peers.
#[derive(Clone, Debug, Deserialize)]
pub struct NameserverGroup {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub nameservers: Vec<Nameserver>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub search_domains_enabled: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Nameserver {
    pub ip: String,
    #[serde(default = "default_ns_type")]
    pub ns_type: String,
    #[serde(default = "default_ns_port")]
    pub port: u16,
}

fn default_ns_type() -> String {
    "udp".to_string()
}

fn default_ns_port() -> u16 {
    53
}

/// Create/update payload for a nameserver group.
#[derive(Clone, Debug, Serialize)]
pub struct NameserverGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nameservers: Vec<Nameserver>,
    pub enabled: bool,
    pub groups: Vec<String>,
    pub primary: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    pub search_domains_enabled: bool,
}

/// Account-wide DNS management settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DnsSettings {
    #[serde(default)]
    pub disabled_management_groups: Vec<String>,
}
