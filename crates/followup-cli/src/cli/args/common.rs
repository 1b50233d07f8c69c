use clap::Args;
use followup_core::providers::llm::openai::DEFAULT_MODEL;
use followup_core::taxonomy::Axis;
use std::path::PathBuf;

/// Which taxonomy a command works on: a built-in axis or a YAML file.
#[derive(Args, Debug, Clone)]
pub struct TaxonomySelector {
    /// Built-in taxonomy: axis1 (8 intents) or axis2 (up to two of 12 priorities)
    #[arg(long, default_value = "axis1", conflicts_with = "taxonomy")]
    pub axis: Axis,

    /// Custom taxonomy YAML (see `followup taxonomy export`)
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Classifier backend
    /// - openai: chat-completions endpoint (needs OPENAI_API_KEY)
    /// - fake: fixed reply for dry runs and tests
    #[arg(long, default_value = "openai", env = "FOLLOWUP_PROVIDER")]
    pub provider: String,

    /// Model identifier (provider-specific)
    #[arg(long, default_value = DEFAULT_MODEL, env = "FOLLOWUP_MODEL")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Sampling temperature; endpoint default when omitted
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Completion token cap; endpoint default when omitted
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Reply of the fake provider; without it every completion is empty
    #[arg(long)]
    pub fake_response: Option<String>,

    #[arg(long, hide = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
