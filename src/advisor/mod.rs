//! Rental advisory assistant.
//!
//! Wraps an opaque text-completion service. Callers always get text back: any failure
//! turns into a short apology in the requested language.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{GatewayError, Result};
use crate::models::Language;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Share of monthly income the community page recommends spending on rent.
const RENT_SHARE_PERCENT: u128 = 30;

/// Opaque remote text completion.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<String>;
}

/// Recommended monthly rent budget for `monthly_income`, in whole TZS.
pub fn recommended_rent_budget(monthly_income: u64) -> u64 {
    (monthly_income as u128 * RENT_SHARE_PERCENT / 100) as u64
}

pub fn fallback_message(language: Language) -> &'static str {
    match language {
        Language::Sw => "Samahani, mtandao unasumbua kidogo. Tafadhali jaribu tena.",
        Language::En => "Sorry, I'm having trouble connecting right now. Please try again.",
    }
}

fn system_instruction(language: Language) -> String {
    let reply_in = match language {
        Language::Sw => "Swahili (Kiswahili sanifu, with common street terms where natural)",
        Language::En => "English",
    };
    format!(
        "You are \"Rafiki wa Nyumba\" (House Friend), the assistant of NIKONEKTI, a rental \
         housing platform in Tanzania (Dar es Salaam, Dodoma, Arusha, Mwanza). \
         Respond in {reply_in}. Be helpful, trustworthy and culturally aware. \
         Cover rental prices, avoiding dalali (broker) scams, tenancy agreements, tenant \
         rights and mobile money payments (M-Pesa, Tigo, Airtel). Quote amounts in TZS. \
         Warn users never to pay before viewing a house, mention that NIKONEKTI verifies \
         landlords, and suggest areas by budget when asked. \
         Keep answers under 100 words and easy to read on a phone."
    )
}

pub struct Advisor {
    client: Option<Arc<dyn CompletionClient>>,
}

impl Advisor {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// An advisor with no backing service; every answer is the fallback.
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.ai_api_key {
            Some(key) => {
                let client = GeminiClient::new(key, &config.ai_model, config.http_timeout)?;
                Ok(Self::new(Arc::new(client)))
            }
            None => {
                tracing::info!("No NIKONEKTI_AI_API_KEY configured; advisor runs offline");
                Ok(Self::offline())
            }
        }
    }

    pub async fn generate_advice(&self, query: &str, language: Language) -> String {
        let Some(client) = &self.client else {
            return fallback_message(language).to_string();
        };

        match client.complete(&system_instruction(language), query).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Advisor returned an empty answer");
                fallback_message(language).to_string()
            }
            Err(e) => {
                tracing::warn!("Advisor request failed: {}", e);
                fallback_message(language).to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        Some(text)
    }
}

/// Gemini `generateContent` over HTTP.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", GEMINI_BASE_URL, self.model);
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .text()
            .ok_or_else(|| GatewayError::Serialization("Completion had no candidates".to_string()))
    }
}
