use serde::{Deserialize, Serialize};

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub user_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Shared answer of signup and login; which optional fields are set depends on the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    requests: RequestClient,
}

impl AuthClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    pub async fn signup(&self, data: &SignUpData) -> Result<AuthResponse, RequestError> {
        self.requests.post_json(endpoints::SIGNUP, data).await
    }

    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, RequestError> {
        self.requests.post_json(endpoints::LOGIN, data).await
    }
}
