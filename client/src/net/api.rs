//! REST client for the authentication backend.
//!
//! Three calls, one attempt each:
//! - `GET  /login`    current user for the bearer token
//! - `POST /login`    email + password, returns a token
//! - `POST /register` new account, returns a token
//!
//! ERROR HANDLING
//! ==============
//! Unauthenticated `GET /login` is `Ok(None)`. Everything else that is not a
//! 2xx maps onto [`ApiError`]; callers decide how to present it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method};
use super::types::{LoginRequest, RegisterRequest, User, parse_token_body, parse_user_body};

const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// `Bearer <token>`, or `None` when there is no token to send.
fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}

fn current_user_request(base_url: &str, token: &str) -> ApiRequest {
    let req = ApiRequest::new(Method::Get, endpoint(base_url, LOGIN_PATH));
    match bearer_header(token) {
        Some(value) => req.with_header("Authorization", value),
        None => req,
    }
}

fn login_request(base_url: &str, body: &LoginRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, endpoint(base_url, LOGIN_PATH)).with_json(body)
}

fn register_request(base_url: &str, body: &RegisterRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, endpoint(base_url, REGISTER_PATH)).with_json(body)
}

fn check_status(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    match resp.status {
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

/// Backend client bound to a base URL and a transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let method = request.method;
        let url = request.url.clone();
        let result = self.transport.send(request).await;
        if let Err(e) = &result {
            log::warn!("{} {url} failed: {e}", method.as_str());
        }
        result
    }

    /// Fetch the user the bearer `token` belongs to.
    ///
    /// # Errors
    ///
    /// Network failures, non-auth error statuses, and malformed bodies.
    /// 401/403 are reported as `Ok(None)`.
    pub async fn fetch_current_user(&self, token: &str) -> Result<Option<User>, ApiError> {
        let resp = self.send(current_user_request(&self.base_url, token)).await?;
        if matches!(resp.status, 401 | 403) {
            return Ok(None);
        }
        let resp = check_status(resp)?;
        parse_user_body(&resp.body)
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on rejected credentials, otherwise as
    /// [`ApiClient::fetch_current_user`], plus [`ApiError::MissingToken`].
    pub async fn login(&self, body: &LoginRequest) -> Result<String, ApiError> {
        let resp = self.send(login_request(&self.base_url, body)?).await?;
        let resp = check_status(resp)?;
        parse_token_body(&resp.body)
    }

    /// Create an account and return its bearer token.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`].
    pub async fn register(&self, body: &RegisterRequest) -> Result<String, ApiError> {
        let resp = self.send(register_request(&self.base_url, body)?).await?;
        let resp = check_status(resp)?;
        parse_token_body(&resp.body)
    }
}
