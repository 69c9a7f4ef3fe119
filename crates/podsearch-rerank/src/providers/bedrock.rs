use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::BedrockRerankConfig;
use crate::error::ProviderError;
use crate::traits::RerankProvider;
use crate::types::{RerankItem, RerankRequest, RerankResponse};

/// Bedrock agent-runtime `rerank` adapter. Candidates travel inline as
/// JSON document sources; the service returns index/relevanceScore pairs
/// sorted by descending relevance and truncated to `numberOfResults`.
#[derive(Clone)]
pub struct BedrockRerankProvider {
    config: BedrockRerankConfig,
    client: Client,
}

impl BedrockRerankProvider {
    pub fn new(config: BedrockRerankConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn build_payload(&self, request: &RerankRequest) -> Value {
        let sources = request
            .documents
            .iter()
            .map(|document| {
                serde_json::json!({
                    "type": "INLINE",
                    "inlineDocumentSource": {
                        "type": "JSON",
                        "jsonDocument": document,
                    },
                })
            })
            .collect::<Vec<_>>();
        serde_json::json!({
            "queries": [
                {
                    "type": "TEXT",
                    "textQuery": {
                        "text": request.query,
                    },
                }
            ],
            "sources": sources,
            "rerankingConfiguration": {
                "type": "BEDROCK_RERANKING_MODEL",
                "bedrockRerankingConfiguration": {
                    "numberOfResults": request.top_n.unwrap_or(10),
                    "modelConfiguration": {
                        "modelArn": self.config.model_arn(),
                    },
                },
            },
        })
    }
}

#[async_trait::async_trait]
impl RerankProvider for BedrockRerankProvider {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        if request.documents.is_empty() {
            return Err(ProviderError::Config(
                "rerank documents is empty".to_string(),
            ));
        }

        let payload = self.build_payload(&request);
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

        let parsed: BedrockRerankResponse = res.json().await?;
        if parsed.results.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "bedrock rerank returned empty results".to_string(),
            ));
        }

        let items = parsed
            .results
            .into_iter()
            .map(|it| RerankItem {
                index: it.index,
                score: it.relevance_score,
            })
            .collect();

        Ok(RerankResponse {
            provider: self.name().to_string(),
            model: self.config.model_id.clone(),
            items,
        })
    }
}

#[derive(Debug, Deserialize)]
struct BedrockRerankResponse {
    results: Vec<BedrockRerankItem>,
}

#[derive(Debug, Deserialize)]
struct BedrockRerankItem {
    index: usize,
    #[serde(rename = "relevanceScore")]
    relevance_score: f32,
}
