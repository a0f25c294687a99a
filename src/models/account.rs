use serde::{Deserialize, Serialize};

/// The tenant owning all other resources. Every installation has exactly one.
#[derive(Clone, Debug, Deserialize)]
pub struct Account {
    pub id: String,
    pub domain: Option<String>,
    pub settings: Option<AccountSettings>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AccountSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_login_expiration_enabled: Option<bool>,
    /// Seconds until an interactive peer login expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_login_expiration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_groups_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_propagation_enabled: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AccountUpdate {
    pub settings: AccountSettings,
}
