//! OpenBao Transit client for keyed HMAC operations.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;

/// Configuration for connecting to an OpenBao instance.
#[derive(Debug, Clone)]
pub struct OpenBaoConfig {
    /// OpenBao server address, e.g. `"http://localhost:8200"`.
    pub addr: String,

    /// OpenBao authentication token.
    pub token: String,

    /// Transit key name to use for HMAC operations.
    pub transit_key: String,
}

/// Keyed HMAC used for token and password verifiers.
///
/// Only opaque verifier strings are ever persisted; the key never leaves the
/// implementation.
#[automock]
#[async_trait]
pub trait HmacVerifier: Send + Sync {
    /// Compute the verifier string for `input`.
    async fn hmac(&self, input: &[u8]) -> Result<String, OpenBaoError>;

    /// Check `input` against a stored verifier string.
    async fn verify(&self, input: &[u8], hmac: &str) -> Result<bool, OpenBaoError>;
}

/// HTTP client for OpenBao Transit HMAC operations.
#[derive(Debug, Clone)]
pub struct OpenBaoClient {
    config: OpenBaoConfig,
    http: Client,
}

impl OpenBaoClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: OpenBaoConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn transit<T: DeserializeOwned>(
        &self,
        operation: &str,
        body: Value,
    ) -> Result<T, OpenBaoError> {
        let url = format!(
            "{}/v1/transit/{operation}/{}",
            self.config.addr.trim_end_matches('/'),
            self.config.transit_key
        );

        let response = self
            .http
            .post(&url)
            .header("X-Vault-Token", &self.config.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(OpenBaoError::UnexpectedResponse(format!(
                "{operation} request failed with status {status}: {text}"
            )));
        }

        let parsed: TransitResponse<T> = response.json().await?;

        Ok(parsed.data)
    }
}

#[async_trait]
impl HmacVerifier for OpenBaoClient {
    async fn hmac(&self, input: &[u8]) -> Result<String, OpenBaoError> {
        let data: HmacData = self
            .transit("hmac", json!({ "input": BASE64.encode(input) }))
            .await?;

        Ok(data.hmac)
    }

    async fn verify(&self, input: &[u8], hmac: &str) -> Result<bool, OpenBaoError> {
        let data: VerifyData = self
            .transit(
                "verify",
                json!({
                    "input": BASE64.encode(input),
                    "hmac": hmac,
                }),
            )
            .await?;

        Ok(data.valid)
    }
}

#[derive(Debug, Deserialize)]
struct TransitResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct HmacData {
    hmac: String,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    valid: bool,
}

/// Errors that can occur when communicating with OpenBao.
#[derive(Debug, Error)]
pub enum OpenBaoError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// OpenBao returned a non-2xx response or unexpected body.
    #[error("unexpected response from OpenBao: {0}")]
    UnexpectedResponse(String),
}
