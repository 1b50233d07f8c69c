use serde::{Deserialize, Serialize};

/// One input row: the whole Q1/R/Q2 excerpt plus its annotated reference code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// 1-based data row (header excluded).
    pub row: usize,
    pub query: String,
    /// Verbatim value of the axis ground-truth column. Normalized only when compared.
    pub ground_truth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub row: usize,
    pub query: String,
    pub ground_truth: String,
    /// Classifier text as returned (trimmed), or the no-response placeholder.
    pub raw_label_text: String,
    /// Decoded code; the sentinel when the text matched nothing.
    pub predicted_code: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A classification request: constant system text, optional example turns, per-record user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ChatTurn>,
    pub user: String,
}

impl ChatRequest {
    /// Flattened conversation in wire order: system, example turns, user.
    pub fn turns(&self) -> Vec<ChatTurn> {
        let mut turns = Vec::with_capacity(self.examples.len() + 2);
        turns.push(ChatTurn {
            role: ChatRole::System,
            content: self.system.clone(),
        });
        turns.extend(self.examples.iter().cloned());
        turns.push(ChatTurn::user(self.user.clone()));
        turns
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Content of the first choice; `None` when the provider returned no usable choice.
    pub text: Option<String>,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}
