use crate::model::ChatRequest;
use crate::providers::llm::LlmClient;
use std::sync::Arc;

/// Placeholder recorded when the collaborator returns no completion.
/// It matches no label, so it decodes to the sentinel.
pub const NO_RESPONSE: &str = "No response";

/// Thin boundary over the chat client: one call, first choice, trimmed.
#[derive(Clone)]
pub struct ClassifierGateway {
    client: Arc<dyn LlmClient>,
}

impl ClassifierGateway {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Transport and status failures propagate; an empty completion does not.
    pub async fn classify(&self, request: &ChatRequest) -> anyhow::Result<String> {
        let resp = self.client.complete(request).await?;
        match resp.text {
            Some(text) => Ok(text.trim().to_string()),
            None => {
                tracing::warn!(
                    provider = resp.provider.as_str(),
                    "completion returned no choices; recording placeholder"
                );
                Ok(NO_RESPONSE.to_string())
            }
        }
    }
}
