//! HTTP transport seam between the API client and the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): [`BrowserTransport`] fails every call, since the
//! backend is only contacted from the browser.
//!
//! Requests and responses are plain values so the API client can be driven
//! by a recording transport in tests.

#![allow(clippy::unused_async)]

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully assembled request: absolute URL, headers, optional JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body and the matching `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if `body` cannot be serialized.
    pub fn with_json<B: serde::Serialize>(self, body: &B) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))?;
        let mut req = self.with_header("Content-Type", "application/json");
        req.body = Some(raw);
        Ok(req)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response. One attempt, no retry.
///
/// Futures are not required to be `Send`: browser fetch futures are
/// single-threaded.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] or [`ApiError::Request`] when no HTTP
    /// response was obtained. Non-2xx statuses are returned as `Ok`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

/// `fetch`-backed transport used by the hydrated app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
