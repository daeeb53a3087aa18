//! Gemini REST client (`v1beta` endpoints).

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::core::app;
use crate::core::config::Config;
use crate::core::models::ModelInfo;

use super::Provider;
use super::error::{ProviderError, map_api_error};

/// Largest page size the list endpoint accepts.
const LIST_PAGE_SIZE: &str = "1000";

/// Guards against a server that keeps handing back page tokens.
const MAX_LIST_PAGES: usize = 50;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or why there is none.
    fn into_text(self) -> Result<String, ProviderError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = block_reason
                .map(|r| format!("prompt blocked ({})", r))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(ProviderError::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|r| format!("no text returned (finish reason: {})", r))
                .unwrap_or_else(|| "no text returned".to_string());
            return Err(ProviderError::EmptyResponse(reason));
        }
        Ok(text)
    }
}

/// `generateContent` URL for a model id. The catalog reports `models/<id>`; bare ids are
/// accepted too. The id is pushed as a single path segment, so `/`, `?` and `#` in it are
/// percent-encoded and cannot leave the model's resource path.
fn generate_url(api_base: &str, model: &str) -> Result<reqwest::Url, ProviderError> {
    let (collection, id) = match model.split_once('/') {
        Some((prefix @ ("models" | "tunedModels"), rest)) => (prefix, rest),
        _ => ("models", model),
    };

    let mut url = reqwest::Url::parse(api_base)
        .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", api_base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidUrl(api_base.to_string()))?
        .pop_if_empty()
        .push("v1beta")
        .push(collection)
        .push(&format!("{}:generateContent", id));
    Ok(url)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProviderError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(map_api_error(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
}

impl GeminiClient {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{}/{}", app::NAME, app::VERSION))
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(config.api_base.clone(), config.api_key().map(str::to_string))
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)
    }
}

#[async_trait]
impl Provider for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1beta/models", self.api_base);

        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        for _ in 0..MAX_LIST_PAGES {
            let mut request = self
                .http
                .get(&url)
                .header("x-goog-api-key", api_key)
                .query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: ListModelsResponse = read_json(request.send().await?).await?;
            models.extend(page.models);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(models),
            }
        }
        log::warn!("Model listing stopped after {} pages", MAX_LIST_PAGES);
        Ok(models)
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;
        let url = generate_url(&self.api_base, model)?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;
        read_json::<GenerateContentResponse>(response)
            .await?
            .into_text()
    }
}
