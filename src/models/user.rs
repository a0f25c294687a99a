use serde::{Deserialize, Serialize};

use super::common::{UserRole, UserStatus};

/// An account member or service user.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(default)]
    pub auto_groups: Vec<String>,
    #[serde(default)]
    pub is_service_user: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub is_current: Option<bool>,
    pub last_login: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_groups: Vec<String>,
    pub is_service_user: bool,
}

impl UserCreate {
    /// Invitation payload for a regular member.
    pub fn member(email: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: Some(email.into()),
            name: Some(name.into()),
            role,
            auto_groups: Vec::new(),
            is_service_user: false,
        }
    }

    /// Payload for a service user; service users carry no email.
    pub fn service_user(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: None,
            name: Some(name.into()),
            role,
            auto_groups: Vec::new(),
            is_service_user: true,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
}
