pub mod fake;
pub mod openai;

use crate::model::{ChatRequest, LlmResponse};
use async_trait::async_trait;

/// External chat-completion collaborator. One call per request, no retries.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;

    fn model(&self) -> &str;
}
