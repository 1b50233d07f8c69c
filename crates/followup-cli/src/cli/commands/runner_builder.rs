use super::super::args::{ProviderArgs, TaxonomySelector};
use anyhow::Context;
use followup_core::config::load_taxonomy;
use followup_core::providers::llm::fake::FakeClient;
use followup_core::providers::llm::openai::OpenAIClient;
use followup_core::providers::llm::LlmClient;
use followup_core::taxonomy::Taxonomy;
use std::sync::Arc;

pub fn resolve_taxonomy(selector: &TaxonomySelector) -> anyhow::Result<Taxonomy> {
    match &selector.taxonomy {
        Some(path) => load_taxonomy(path)
            .with_context(|| format!("invalid taxonomy file {}", path.display())),
        None => {
            let taxonomy = selector.axis.taxonomy();
            taxonomy.validate()?;
            Ok(taxonomy)
        }
    }
}

pub fn build_client(args: &ProviderArgs) -> anyhow::Result<Arc<dyn LlmClient>> {
    match args.provider.as_str() {
        "openai" => {
            let key = args
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("provider 'openai' requires OPENAI_API_KEY"))?;
            let mut client = OpenAIClient::new(args.model.clone(), key)
                .with_temperature(args.temperature)
                .with_max_tokens(args.max_tokens);
            if let Some(url) = &args.base_url {
                client = client.with_base_url(url.clone());
            }
            Ok(Arc::new(client))
        }
        "fake" => {
            let mut client = FakeClient::new(args.model.clone());
            if let Some(reply) = &args.fake_response {
                client = client.with_response(reply.clone());
            }
            Ok(Arc::new(client))
        }
        other => anyhow::bail!("unknown provider: {} (expected openai or fake)", other),
    }
}
