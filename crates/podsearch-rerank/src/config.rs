use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BedrockRerankConfig {
    pub api_key: String,
    pub region: String,
    pub model_id: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl BedrockRerankConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        let region = "us-west-2".to_string();
        Self {
            api_key: api_key.into(),
            endpoint: format!("https://bedrock-agent-runtime.{region}.amazonaws.com/rerank"),
            region,
            model_id: "cohere.rerank-v3-5:0".to_string(),
            timeout: Duration::from_secs(8),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self.endpoint = format!(
            "https://bedrock-agent-runtime.{}.amazonaws.com/rerank",
            self.region
        );
        self
    }

    /// Foundation-model ARN submitted in the reranking configuration.
    pub fn model_arn(&self) -> String {
        format!(
            "arn:aws:bedrock:{}::foundation-model/{}",
            self.region, self.model_id
        )
    }
}

#[derive(Debug, Clone)]
pub struct CohereRerankConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl CohereRerankConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "rerank-v3.5".to_string(),
            endpoint: "https://api.cohere.com/v2/rerank".to_string(),
            timeout: Duration::from_secs(8),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RerankProviderConfig {
    Bedrock(BedrockRerankConfig),
    Cohere(CohereRerankConfig),
}
