use reqwest::Client;

use crate::backend::error::GenerateError;
use crate::backend::types::{ErrorBody, GenerateRequest, GenerationResult};

/// Path of the generation endpoint, relative to the configured base URL.
const GENERATE_PATH: &str = "/api/generate";

/// HTTP client for the draft-generation backend.
///
/// Issues exactly one POST per call and never retries. No request timeout is
/// configured: a hung backend leaves the caller waiting, which the UI layer
/// renders as an indefinite loading state.
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GenerateError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a presentation draft for the given snapshot of form fields.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerationResult, GenerateError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        tracing::info!(
            topic = %request.topic,
            length_minutes = request.length_minutes,
            "submitting generation request"
        );

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Best effort: pull the backend's own error text out of the body.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            tracing::warn!(status = status.as_u16(), "backend reported failure");
            return Err(GenerateError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let result: GenerationResult = response
            .json()
            .await
            .map_err(|err| GenerateError::InvalidResponse(err.to_string()))?;
        tracing::info!(draft_len = result.draft.len(), "draft received");
        Ok(result)
    }
}
