use super::LlmClient;
use crate::model::{ChatRequest, LlmResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted reply of the fake provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeReply {
    Text(String),
    /// Completion without any choice.
    NoChoices,
    /// Transport-level failure.
    Fail(String),
}

/// Deterministic stand-in for the chat collaborator.
///
/// Scripted replies are consumed in call order; once exhausted, every call
/// gets the fallback reply. Requests are recorded for inspection.
#[derive(Debug)]
pub struct FakeClient {
    model: String,
    script: Mutex<VecDeque<FakeReply>>,
    fallback: FakeReply,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            script: Mutex::new(VecDeque::new()),
            fallback: FakeReply::NoChoices,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fallback = FakeReply::Text(response.into());
        self
    }

    pub fn with_script(self, replies: impl IntoIterator<Item = FakeReply>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.extend(replies);
        }
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        match self.requests.lock() {
            Ok(r) => r.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn next_reply(&self) -> anyhow::Result<FakeReply> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| anyhow::anyhow!("fake client script lock poisoned"))?;
        Ok(script.pop_front().unwrap_or_else(|| self.fallback.clone()))
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }
        let text = match self.next_reply()? {
            FakeReply::Text(t) => Some(t),
            FakeReply::NoChoices => None,
            FakeReply::Fail(msg) => anyhow::bail!("fake transport error: {}", msg),
        };

        Ok(LlmResponse {
            text,
            provider: "fake".to_string(),
            model: self.model.clone(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req() -> ChatRequest {
        ChatRequest {
            system: "s".into(),
            examples: vec![],
            user: "u".into(),
        }
    }

    #[tokio::test]
    async fn script_then_fallback() {
        let client = FakeClient::new("m".into())
            .with_response("Narrowing Down")
            .with_script([FakeReply::Text("Exploring Domain".into()), FakeReply::NoChoices]);

        let a = client.complete(&req()).await.unwrap();
        let b = client.complete(&req()).await.unwrap();
        let c = client.complete(&req()).await.unwrap();
        assert_eq!(a.text.as_deref(), Some("Exploring Domain"));
        assert_eq!(b.text, None);
        assert_eq!(c.text.as_deref(), Some("Narrowing Down"));
        assert_eq!(client.requests().len(), 3);
    }

    #[tokio::test]
    async fn scripted_failure_is_an_error() {
        let client = FakeClient::new("m".into()).with_script([FakeReply::Fail("down".into())]);
        let err = client.complete(&req()).await.unwrap_err();
        assert!(err.to_string().contains("down"));
    }
}
