use std::sync::Arc;

use crate::config::RerankProviderConfig;
use crate::error::ProviderError;
use crate::providers::{BedrockRerankProvider, CohereRerankProvider};
use crate::traits::RerankProvider;

pub fn build_rerank_provider(
    cfg: RerankProviderConfig,
) -> Result<Arc<dyn RerankProvider>, ProviderError> {
    match cfg {
        RerankProviderConfig::Bedrock(c) => Ok(Arc::new(BedrockRerankProvider::new(c)?)),
        RerankProviderConfig::Cohere(c) => Ok(Arc::new(CohereRerankProvider::new(c)?)),
    }
}
