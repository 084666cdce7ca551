use crate::config::{CredentialProvider, ServingConfig};
use crate::error::ScdError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn query(&self, prompt: &str) -> Result<String, ScdError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    inputs: Vec<ChatMessage<'a>>,
}

/// Databricks Model Serving client. Credentials are resolved on every call
/// and no HTTP connection outlives a single query.
pub struct ServingClient<P> {
    config: ServingConfig,
    credentials: P,
}

impl<P: CredentialProvider> ServingClient<P> {
    pub fn new(config: ServingConfig, credentials: P) -> Self {
        Self { config, credentials }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.config.endpoint_name
    }
}

#[async_trait]
impl<P: CredentialProvider> InferenceBackend for ServingClient<P> {
    async fn query(&self, prompt: &str) -> Result<String, ScdError> {
        let creds = self.credentials.resolve()?;
        let url = self.config.invocations_url(&creds);

        let payload = QueryRequest {
            inputs: vec![ChatMessage { role: "user", content: prompt }],
        };

        log::debug!("📡 Querying serving endpoint '{}' ({} chars)", self.config.endpoint_name, prompt.len());

        let client = reqwest::Client::builder().build()?;
        let res = client
            .post(&url)
            .bearer_auth(&creds.token)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            log::error!("Serving endpoint returned {}: {}", status, body);
            return Err(ScdError::Endpoint { status: status.as_u16(), body });
        }

        let raw = res.text().await?;
        log::debug!("   Response body: {} bytes", raw.len());

        Ok(extract_output_text(&raw))
    }
}

/// Pulls the top-level `output_text` out of a response body. Any other shape
/// degrades to a rendering of the whole body; the result is never empty.
pub fn extract_output_text(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(body) => {
            if let Some(text) = body.get("output_text").and_then(Value::as_str) {
                return text.to_string();
            }
            log::warn!("⚠️  Response has no 'output_text'; showing raw response");
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
        }
        Err(e) => {
            log::warn!("⚠️  Response is not JSON ({e}); showing raw body");
            if raw.trim().is_empty() {
                "<empty response>".to_string()
            } else {
                raw.to_string()
            }
        }
    }
}
