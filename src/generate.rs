//! Client for the generative drafting service.
//!
//! Wraps the Gemini `generateContent` endpoint behind two operations:
//! drafting a post from a topic and rewriting existing content under an
//! instruction. Failures are returned to the caller unretried; the
//! editor surfaces them and leaves its state untouched.

use crate::config::GenerateConfig;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Errors from the drafting service.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API key environment variable `{0}` is not set")]
    MissingApiKey(String),

    #[error("request to the generation service failed")]
    Http(#[from] reqwest::Error),

    #[error("generation service returned status {status}")]
    Api { status: u16 },

    #[error("generation service returned no content")]
    EmptyResponse,
}

/// HTTP client for the Gemini generation API.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client from the `[generate]` config section.
    ///
    /// The API key is read from the configured environment variable.
    pub fn from_config(config: &GenerateConfig) -> Result<Self, GenerateError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| GenerateError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self {
            http: Client::new(),
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
        })
    }

    /// Draft a full blog post about `topic`.
    ///
    /// Returns raw markdown with no surrounding code fences.
    pub async fn generate_draft(&self, topic: &str, tone: &str) -> Result<String, GenerateError> {
        self.complete(&blog_prompt(topic, tone)).await
    }

    /// Rewrite `content` according to `instruction`.
    pub async fn improve(&self, content: &str, instruction: &str) -> Result<String, GenerateError> {
        self.complete(&improve_prompt(content, instruction)).await
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let payload: GenerateResponse = response.json().await?;
        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerateError::EmptyResponse)
    }
}

// ============================================================================
// Prompts
// ============================================================================

fn blog_prompt(topic: &str, tone: &str) -> String {
    format!(
        "You are an expert technical blog writer.\n\
         Write a comprehensive, engaging blog post about: \"{topic}\".\n\
         Tone: {tone}.\n\
         Format: Markdown.\n\
         Structure:\n\
         - Engaging Title (H1)\n\
         - Introduction\n\
         - Key concepts (use H2 and H3)\n\
         - Code examples if relevant (using markdown code blocks)\n\
         - Conclusion.\n\
         \n\
         Do not include the markdown code fences (```) at the start or end of the \
         response, just return the raw markdown content."
    )
}

fn improve_prompt(content: &str, instruction: &str) -> String {
    format!(
        "Act as a professional editor.\n\
         Instruction: {instruction}\n\
         \n\
         Original Content:\n\
         {content}\n\
         \n\
         Return the rewritten content in Markdown format. Do not wrap in code fences."
    )
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_prompt_mentions_topic_and_tone() {
        let prompt = blog_prompt("Quantum Computing", "casual");
        assert!(prompt.contains("\"Quantum Computing\""));
        assert!(prompt.contains("Tone: casual."));
        assert!(prompt.contains("raw markdown content"));
    }

    #[test]
    fn test_improve_prompt_embeds_original() {
        let prompt = improve_prompt("# Old Draft", "make it shorter");
        assert!(prompt.contains("Instruction: make it shorter"));
        assert!(prompt.contains("# Old Draft"));
    }

    #[test]
    fn test_response_parsing() {
        let json = r##"{
            "candidates": [
                { "content": { "parts": [{ "text": "# Generated" }] } }
            ]
        }"##;
        let payload: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.candidates[0].content.parts[0].text, "# Generated");
    }

    #[test]
    fn test_response_parsing_tolerates_empty() {
        let payload: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.candidates.is_empty());
    }
}
