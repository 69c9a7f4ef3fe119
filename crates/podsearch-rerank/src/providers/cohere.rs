use reqwest::Client;
use serde::Deserialize;

use crate::config::CohereRerankConfig;
use crate::error::ProviderError;
use crate::traits::RerankProvider;
use crate::types::{RerankItem, RerankRequest, RerankResponse};

/// Direct Cohere v2 rerank adapter. Flat JSON documents are serialized to
/// text since the endpoint scores strings.
#[derive(Clone)]
pub struct CohereRerankProvider {
    config: CohereRerankConfig,
    client: Client,
}

impl CohereRerankProvider {
    pub fn new(config: CohereRerankConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl RerankProvider for CohereRerankProvider {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        if request.documents.is_empty() {
            return Err(ProviderError::Config(
                "rerank documents is empty".to_string(),
            ));
        }

        let documents = request
            .documents
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        let payload = serde_json::json!({
            "model": self.config.model,
            "query": request.query,
            "documents": documents,
            "top_n": request.top_n.unwrap_or(10),
            "return_documents": false,
        });

        let res = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let parsed: CohereRerankResponse = res.json().await?;
        if parsed.results.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "cohere rerank returned empty results".to_string(),
            ));
        }

        let items = parsed
            .results
            .into_iter()
            .map(|it| RerankItem {
                index: it.index,
                score: it.score,
            })
            .collect();

        Ok(RerankResponse {
            provider: self.name().to_string(),
            model: self.config.model.clone(),
            items,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CohereRerankResponse {
    results: Vec<CohereRerankItem>,
}

#[derive(Debug, Deserialize)]
struct CohereRerankItem {
    index: usize,
    #[serde(alias = "relevance_score", alias = "score")]
    score: f32,
}
