// api client for the remote profanity-check service
// every endpoint wraps its payload in the same envelope:
// { status, responseData?, message?, detected_language?, raw? }

use crate::Error;
use crate::core::types::{Classification, Detection, Language, LlmVerification};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://portal.dev.karmayogibharat.net/profanity-check-api";

pub struct Api {
    client: reqwest::Client,
    base_url: String,
}

// request body for all four endpoints; language is only sent when set
#[derive(Serialize)]
struct CheckBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
}

#[derive(Deserialize)]
struct Envelope {
    status: String,
    #[serde(rename = "responseData")]
    response_data: Option<serde_json::Value>,
    message: Option<String>,
    detected_language: Option<String>,
    raw: Option<String>,
}

impl Api {
    // the PROFANITY_API_URL env var is resolved by the cli layer; this
    // only fills in the deployed default
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn check_basic(&self, text: &str) -> Result<Classification, Error> {
        let body = CheckBody {
            text,
            language: None,
        };
        let envelope = self
            .post("/api/v1/profanity/fasttext", &body, "FastText")
            .await?;
        unwrap_payload(envelope, "FastText")
    }

    pub async fn check_transformer(
        &self,
        text: &str,
        language: Option<Language>,
    ) -> Result<Classification, Error> {
        let body = CheckBody { text, language };
        let envelope = self
            .post("/api/v1/profanity/transformer", &body, "Transformer")
            .await?;
        unwrap_payload(envelope, "Transformer")
    }

    pub async fn verify_llm(&self, text: &str) -> Result<LlmVerification, Error> {
        let body = CheckBody {
            text,
            language: None,
        };
        let envelope = self
            .post("/api/v1/profanity/profanity_validator", &body, "LLM")
            .await?;
        unwrap_payload(envelope, "LLM")
    }

    // unlike the checks, the payload here lives in detected_language / raw,
    // not responseData
    pub async fn detect_language(&self, text: &str) -> Result<Detection, Error> {
        let body = CheckBody {
            text,
            language: None,
        };
        let envelope = self
            .post("/api/v1/profanity/detect_language", &body, "Language detection")
            .await?;

        let fallback = || "Language detection API error".to_string();
        if envelope.status != "success" {
            return Err(Error::Api(envelope.message.unwrap_or_else(fallback)));
        }
        let Some(detected) = envelope.detected_language else {
            return Err(Error::Api(envelope.message.unwrap_or_else(fallback)));
        };

        Ok(Detection {
            language: Language::parse(&detected),
            raw: envelope.raw.unwrap_or(detected),
        })
    }

    // single fire-once post; no retries or timeouts on purpose, a resubmit
    // is always a fresh request
    async fn post(
        &self,
        path: &str,
        body: &CheckBody<'_>,
        capability: &str,
    ) -> Result<Envelope, Error> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("{capability} API error")));
        }

        Ok(response.json::<Envelope>().await?)
    }
}

// status must be "success" and responseData present, otherwise fail with the
// server message when it sent one
fn unwrap_payload<T: DeserializeOwned>(envelope: Envelope, capability: &str) -> Result<T, Error> {
    let fallback = || format!("{capability} API error");
    if envelope.status != "success" {
        return Err(Error::Api(envelope.message.unwrap_or_else(fallback)));
    }
    match envelope.response_data {
        Some(data) => Ok(serde_json::from_value(data)?),
        None => Err(Error::Api(envelope.message.unwrap_or_else(fallback))),
    }
}
