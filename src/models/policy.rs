use serde::{Deserialize, Serialize};

use super::common::Protocol;

/// Access-control policy between peer groups.
#[derive(Clone, Debug, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<PolicyRule>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PolicyRule {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    pub action: String,
    #[serde(default)]
    pub bidirectional: bool,
    pub protocol: Protocol,
    pub ports: Option<Vec<String>>,
    #[serde(default)]
    pub sources: Vec<PolicyRuleGroup>,
    #[serde(default)]
    pub destinations: Vec<PolicyRuleGroup>,
}

/// Group reference inside a rule; responses expand these to objects while
/// requests send bare group IDs.
#[derive(Clone, Debug, Deserialize)]
pub struct PolicyRuleGroup {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub rules: Vec<PolicyRuleCreate>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyRuleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub action: String,
    pub bidirectional: bool,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_deserializes_expanded_groups() {
        let policy: Policy = serde_json::from_str(
            r#"{
                "id": "pol-1",
                "name": "allow-web",
                "enabled": true,
                "rules": [{
                    "id": "rule-1",
                    "name": "allow-web",
                    "enabled": true,
                    "action": "accept",
                    "bidirectional": true,
                    "protocol": "tcp",
                    "ports": ["80", "443"],
                    "sources": [{"id": "g1", "name": "clients"}],
                    "destinations": [{"id": "g2", "name": "servers"}]
                }]
            }"#,
        )
        .unwrap();
        let rule = &policy.rules[0];
        assert_eq!(rule.protocol, Protocol::Tcp);
        assert_eq!(rule.sources[0].id, "g1");
        assert_eq!(rule.ports.as_deref(), Some(&["80".to_string(), "443".to_string()][..]));
    }

    #[test]
    fn test_rule_create_sends_bare_ids() {
        let rule = PolicyRuleCreate {
            name: "allow-ssh".to_string(),
            description: None,
            enabled: true,
            action: "accept".to_string(),
            bidirectional: false,
            protocol: Protocol::Tcp,
            ports: Some(vec!["22".to_string()]),
            sources: vec!["g1".to_string()],
            destinations: vec!["g2".to_string()],
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["sources"], serde_json::json!(["g1"]));
        assert!(json.get("description").is_none());
    }
}
