use serde::{Deserialize, Serialize};

/// A personal access token attached to a user.
#[derive(Clone, Debug, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub expiration_date: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub last_used: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TokenCreate {
    pub name: String,
    /// Token lifetime in days.
    pub expires_in: u32,
}

/// Creation response; the plain token value is only ever returned here.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenCreated {
    pub plain_token: String,
    pub personal_access_token: Token,
}
