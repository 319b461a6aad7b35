//! Wire DTOs for the authentication backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's snake_case JSON. The backend also echoes
//! the stored password hash in the user object; [`User`] deliberately has no
//! such field, so serde drops it on decode and it never reaches the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// The authenticated user as returned by `GET /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Creation timestamp as sent by the backend (naive ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// First and last name joined, falling back to the email.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }

    pub fn admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Extract the bearer token from a login/register response body.
///
/// Accepts `{"token": "..."}`, a JSON string, or the bare token as text.
pub(crate) fn parse_token_body(body: &str) -> Result<String, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingToken);
    }
    let token = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("token") {
            Some(serde_json::Value::String(token)) => token.clone(),
            Some(_) => return Err(ApiError::Decode("token field is not a string".to_owned())),
            None => return Err(ApiError::MissingToken),
        },
        Ok(serde_json::Value::String(token)) => token,
        Ok(other) => return Err(ApiError::Decode(format!("expected token, got {other}"))),
        Err(_) => trimmed.to_owned(),
    };
    if token.is_empty() { Err(ApiError::MissingToken) } else { Ok(token) }
}

/// Decode a `GET /login` body. Empty, `null`, `false` and `""` mean no user.
pub(crate) fn parse_user_body(body: &str) -> Result<Option<User>, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| ApiError::Decode(e.to_string()))?;
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        value @ serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
        other => Err(ApiError::Decode(format!("expected user object, got {other}"))),
    }
}
