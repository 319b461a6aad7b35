//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API call returns `Result<_, ApiError>`; views turn errors into
//! messages via [`ApiError::user_message`] and never panic on a failed
//! request. "Not logged in" is not an error: `fetch_current_user` reports it
//! as `Ok(None)`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be assembled (bad header, unserializable body).
    #[error("request could not be built: {0}")]
    Request(String),

    /// Backend rejected the credentials (HTTP 401).
    #[error("invalid credentials")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("response did not contain a token")]
    MissingToken,

    /// A freshly issued token did not resolve to a user.
    #[error("token did not resolve to a user")]
    NoUser,
}

impl ApiError {
    /// Message suitable for showing next to the form that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Invalid email or password.".to_owned(),
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Status(status) if *status >= 500 => {
                format!("The server encountered an error ({status}). Try again later.")
            }
            Self::Status(status) => format!("The server rejected the request ({status})."),
            Self::Decode(_) | Self::MissingToken | Self::NoUser => {
                "The server sent an unexpected response.".to_owned()
            }
            Self::Request(_) => "Could not send the request.".to_owned(),
        }
    }
}
