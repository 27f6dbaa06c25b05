//! Error types for the Marquee client.

use marquee_core::ApiErrorBody;
use thiserror::Error;

/// Errors that can occur when talking to the Marquee backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a structured error body
    #[error("Server error ({status}): {}", .body.error)]
    Api { status: u16, body: ApiErrorBody },

    /// Server answered with an error status and an unstructured body
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Request went out but no response came back
    #[error("No response from server: {0}")]
    NoResponse(String),

    /// Request could not be built or sent
    #[error("Request not sent: {0}")]
    NotSent(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// How far a failed request got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// The server answered (with an error status or an unreadable body)
    Responded,
    /// The request was sent but nothing came back
    NoResponse,
    /// The request never left the client
    NotSent,
}

impl ClientError {
    /// Classify a `reqwest` send failure.
    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ClientError::NotSent(error.to_string())
        } else if error.is_connect() || error.is_timeout() || error.is_request() {
            ClientError::NoResponse(error.to_string())
        } else {
            ClientError::Request(error)
        }
    }

    pub fn transport(&self) -> Transport {
        match self {
            ClientError::Api { .. } | ClientError::ServerError { .. } | ClientError::ParseError(_) => {
                Transport::Responded
            }
            ClientError::NoResponse(_) => Transport::NoResponse,
            ClientError::NotSent(_) | ClientError::InvalidUrl(_) => Transport::NotSent,
            ClientError::Request(e) => {
                if e.is_builder() {
                    Transport::NotSent
                } else if e.status().is_some() || e.is_decode() || e.is_body() {
                    Transport::Responded
                } else {
                    Transport::NoResponse
                }
            }
        }
    }

    /// Structured error body, when the server sent one
    pub fn api_body(&self) -> Option<&ApiErrorBody> {
        match self {
            ClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::ServerError { status, .. } => {
                Some(*status)
            }
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// What the server said: the `error` field of a structured body, or the
    /// raw body text.
    pub fn server_message(&self) -> String {
        match self {
            ClientError::Api { body, .. } => body.error.clone(),
            ClientError::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let api = ClientError::Api {
            status: 500,
            body: ApiErrorBody {
                error: "locked".into(),
                details: vec![],
            },
        };
        assert_eq!(api.transport(), Transport::Responded);
        assert_eq!(api.server_message(), "locked");
        assert_eq!(api.status(), Some(500));

        let plain = ClientError::ServerError {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(plain.transport(), Transport::Responded);
        assert_eq!(plain.server_message(), "Bad Gateway");
        assert!(plain.api_body().is_none());

        assert_eq!(
            ClientError::NoResponse("timed out".into()).transport(),
            Transport::NoResponse
        );
        assert_eq!(
            ClientError::NotSent("bad header".into()).transport(),
            Transport::NotSent
        );
        assert_eq!(
            ClientError::InvalidUrl("ftp://x".into()).transport(),
            Transport::NotSent
        );
    }
}
