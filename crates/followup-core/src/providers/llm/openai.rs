use super::LlmClient;
use crate::errors::ProviderError;
use crate::model::{ChatRequest, LlmResponse};
use async_trait::async_trait;
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-0125-preview";

const PROVIDER: &str = "openai";

pub struct OpenAIClient {
    pub model: String,
    api_key: String,
    pub base_url: String,
    /// Sent only when set; the endpoint default applies otherwise.
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(model: String, api_key: String) -> Self {
        Self {
            model,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_tokens: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn request_body(&self, request: &ChatRequest) -> Value {
        let messages: Vec<Value> = request
            .turns()
            .iter()
            .map(|t| json!({ "role": t.role.as_str(), "content": t.content }))
            .collect();

        let mut body = json!({
            "model": self.model,
            "messages": messages,
        });
        if let Some(t) = self.temperature {
            body["temperature"] = json!(t);
        }
        if let Some(m) = self.max_tokens {
            body["max_tokens"] = json!(m);
        }
        body
    }
}

/// Content of `choices[0].message.content`; `None` when there is no choice or it carries no text.
pub(crate) fn parse_first_choice(body: &Value) -> Result<Option<String>, ProviderError> {
    let choices = match body.get("choices") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(choices)) => choices,
        Some(other) => {
            return Err(ProviderError::MalformedBody {
                provider: PROVIDER.to_string(),
                detail: format!("'choices' is not an array: {}", other),
            })
        }
    };
    Ok(choices
        .first()
        .and_then(|c| c.pointer("/message/content"))
        .and_then(Value::as_str)
        .map(ToString::to_string))
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse> {
        let body = self.request_body(request);

        let resp = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                body: error_text,
            }
            .into());
        }

        let json: Value = resp.json().await.map_err(|e| ProviderError::MalformedBody {
            provider: PROVIDER.to_string(),
            detail: e.to_string(),
        })?;
        let text = parse_first_choice(&json)?;

        Ok(LlmResponse {
            text,
            provider: PROVIDER.to_string(),
            model: json
                .get("model")
                .and_then(Value::as_str)
                .unwrap_or(&self.model)
                .to_string(),
            meta: json!({ "usage": json.get("usage").cloned().unwrap_or(Value::Null) }),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }
}
