use serde::Deserialize;

/// One entry in the account activity log.
#[derive(Clone, Debug, Deserialize)]
pub struct AuditEvent {
    pub id: Option<serde_json::Value>,
    pub timestamp: String,
    pub activity: String,
    pub activity_code: Option<String>,
    pub initiator_id: Option<String>,
    pub initiator_name: Option<String>,
    pub initiator_email: Option<String>,
    pub target_id: Option<String>,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// One observed traffic flow between peers or resources.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkTrafficEvent {
    pub flow_id: Option<String>,
    pub reporter_id: Option<String>,
    pub timestamp: Option<String>,
    pub direction: Option<String>,
    pub protocol: Option<u8>,
    #[serde(default)]
    pub source: serde_json::Value,
    #[serde(default)]
    pub destination: serde_json::Value,
}
