use reqwest::Client;
use serde::Deserialize;

use crate::{NotesGenerator, NotesResponse, Summarizer, SummaryResponse};

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl GeminiClient {
    const SUMMARIZE_PROMPT: &str = include_str!("../prompts/summarize.txt");

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        model_name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt.into() }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url,
                model_name.into()
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the model returned any.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl NotesGenerator for GeminiClient {
    const NOTES_MODEL: &'static str = "gemini-1.5-flash";
    type Error = GeminiError;

    async fn generate_notes(
        &self,
        instruction: &str,
        transcript: &str,
    ) -> Result<NotesResponse, Self::Error> {
        let prompt = format!("{instruction}\n{transcript}");

        let response = self
            .send_generate_request(Self::NOTES_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate notes"))?;

        let notes = response.first_text().ok_or_else(|| GeminiError::Api {
            status: 0,
            message: "No content in response".into(),
        })?;

        Ok(NotesResponse { notes })
    }
}

impl Summarizer for GeminiClient {
    const SUMMARIZER_MODEL: &'static str = "gemini-1.5-flash";
    type Error = GeminiError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        let prompt = format!("{}\n{content}", Self::SUMMARIZE_PROMPT);

        let response = self
            .send_generate_request(Self::SUMMARIZER_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response.first_text().ok_or_else(|| GeminiError::Api {
            status: 0,
            message: "No content in response".into(),
        })?;

        Ok(SummaryResponse { summary })
    }
}
