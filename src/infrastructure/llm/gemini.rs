use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::{ports::GenerationBackend, DomainError};
use crate::infrastructure::config::GeminiConfig;

/// Remote generateContent backend.
///
/// An API-reported error and an unrecognized response shape both come back as
/// `Ok` diagnostic replies; only transport failures are `Err`, which the
/// dispatcher turns into an explanatory reply. One attempt per call.
pub struct GeminiBackend {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.url.clone(), config.api_key.clone())
    }

    fn first_candidate_text(body: &Value) -> Option<&str> {
        body.get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => return Ok(format!("Could not parse the API response: {e}")),
        };

        if let Some(message) = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return Ok(format!("The API returned an error: {message}"));
        }

        match Self::first_candidate_text(&body) {
            Some(text) => Ok(text.to_string()),
            None => Ok(format!(
                "Could not parse the API response: unexpected shape {body}"
            )),
        }
    }
}
