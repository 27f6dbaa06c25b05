//! Response decoding shared by the sub-clients.

use crate::error::{ClientError, Result};
use crate::types::Ack;
use marquee_core::ApiErrorBody;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Decode a successful JSON body, or turn an error status into a
/// `ClientError`.
pub(crate) async fn json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else {
        Err(error_from(status.as_u16(), response).await)
    }
}

/// Like [`json`], but an empty success body is an empty acknowledgement.
pub(crate) async fn ack(response: Response, what: &str) -> Result<Ack> {
    let status = response.status();

    if !status.is_success() {
        return Err(error_from(status.as_u16(), response).await);
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Ack::default());
    }

    serde_json::from_str(&text)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {} response: {}", what, e)))
}

async fn error_from(status: u16, response: Response) -> ClientError {
    let error_text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ApiErrorBody>(&error_text) {
        Ok(body) => ClientError::Api { status, body },
        Err(_) => ClientError::ServerError {
            status,
            message: error_text,
        },
    }
}
