use serde::{Deserialize, Serialize};

use super::common::SetupKeyType;

/// A pre-shared key peers use to enroll.
#[derive(Clone, Debug, Deserialize)]
pub struct SetupKey {
    pub id: String,
    pub key: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub used_times: u32,
    pub expires: Option<String>,
    pub last_used: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub auto_groups: Vec<String>,
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub ephemeral: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct SetupKeyCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    /// Seconds until expiry.
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct SetupKeyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_groups: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_key_type_field_rename() {
        let key: SetupKey = serde_json::from_str(
            r#"{"id": "k1", "key": "XXXX", "name": "dev", "type": "one-off", "valid": true}"#,
        )
        .unwrap();
        assert_eq!(key.key_type, SetupKeyType::OneOff);
        assert!(key.valid);

        let create = SetupKeyCreate {
            name: "dev".to_string(),
            key_type: SetupKeyType::Reusable,
            expires_in: 86400,
            auto_groups: None,
            usage_limit: None,
            ephemeral: None,
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["type"], "reusable");
        assert_eq!(json["expires_in"], 86400);
    }
}
