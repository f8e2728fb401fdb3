//! Outbound HTTP for payloads.

use serde_json::{Map, Value};

use crate::Payload;
use crate::error::{BatchError, SendError};

/// Decoded JSON object returned by the endpoint.
pub type Response = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct PostClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PostClient {
    /// No request timeout is set: a stalled endpoint stalls the batch.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BatchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BatchError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` as JSON. Only a 2xx status with a JSON object body is a success.
    pub async fn send(&self, payload: &Payload) -> Result<Response, SendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SendError::from_reqwest_error(e, &self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SendError::from_reqwest_error(e, &self.endpoint))?;

        serde_json::from_slice::<Response>(&body).map_err(|e| SendError::Decode {
            message: e.to_string(),
        })
    }
}
