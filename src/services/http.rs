use super::{Device, Embedder, GenerationParams, GrammarChecker, GrammarIssue, Paraphraser};
use crate::error::{ReflectError, RlResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Blocking client shared by the adapters. Requests never time out.
pub fn build_client() -> RlResult<Client> {
    Ok(Client::builder().timeout(None::<Duration>).build()?)
}

// --- Paraphrase generation ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
    device: Device,
}

#[derive(Deserialize)]
struct GenerateResponse {
    sequences: Vec<String>,
}

pub struct HttpParaphraser {
    client: Client,
    url: String,
    device: Device,
}

impl HttpParaphraser {
    pub fn new(client: Client, url: impl Into<String>, device: Device) -> Self {
        let url = url.into();
        let device = device.resolve();
        info!("Paraphraser bound to {} on {}", url, device);
        Self { client, url, device }
    }

    pub fn device(&self) -> Device {
        self.device
    }
}

impl Paraphraser for HttpParaphraser {
    fn generate(&self, text: &str, params: &GenerationParams) -> RlResult<Vec<String>> {
        let body = GenerateRequest {
            inputs: text,
            parameters: params,
            device: self.device,
        };
        let resp: GenerateResponse = self
            .client
            .post(self.url.as_str())
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;
        debug!("Paraphraser returned {} sequences", resp.sequences.len());
        Ok(resp.sequences)
    }
}

// --- Sentence embeddings ---

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a str,
}

pub struct HttpEmbedder {
    client: Client,
    url: String,
}

impl HttpEmbedder {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        let url = url.into();
        info!("Embedder bound to {}", url);
        Self { client, url }
    }
}

impl Embedder for HttpEmbedder {
    fn embed(&self, text: &str) -> RlResult<Vec<f32>> {
        let rows: Vec<Vec<f32>> = self
            .client
            .post(self.url.as_str())
            .json(&EmbedRequest { inputs: text })
            .send()?
            .error_for_status()?
            .json()?;
        first_row(rows)
    }
}

fn first_row(rows: Vec<Vec<f32>>) -> RlResult<Vec<f32>> {
    rows.into_iter()
        .next()
        .filter(|row| !row.is_empty())
        .ok_or_else(|| ReflectError::Embedding("embedding service returned no vector".into()))
}

// --- Grammar checking (LanguageTool /v2/check) ---

#[derive(Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

#[derive(Deserialize)]
struct CheckMatch {
    #[serde(default)]
    message: String,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    length: usize,
    rule: Option<CheckRule>,
}

#[derive(Deserialize)]
struct CheckRule {
    id: String,
}

impl From<CheckMatch> for GrammarIssue {
    fn from(m: CheckMatch) -> Self {
        GrammarIssue {
            message: m.message,
            offset: m.offset,
            length: m.length,
            rule_id: m.rule.map(|r| r.id),
        }
    }
}

pub struct LanguageToolChecker {
    client: Client,
    url: String,
    language: String,
}

impl LanguageToolChecker {
    pub fn new(client: Client, url: impl Into<String>, language: impl Into<String>) -> Self {
        let url = url.into();
        let language = language.into();
        info!("Grammar checker bound to {} ({})", url, language);
        Self {
            client,
            url,
            language,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl GrammarChecker for LanguageToolChecker {
    fn check(&self, text: &str) -> RlResult<Vec<GrammarIssue>> {
        let resp: CheckResponse = self
            .client
            .post(self.url.as_str())
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()?
            .error_for_status()?
            .json()
            .map_err(|e| {
                ReflectError::Grammar(format!("unreadable LanguageTool reply: {}", e))
            })?;
        Ok(resp.matches.into_iter().map(GrammarIssue::from).collect())
    }
}
