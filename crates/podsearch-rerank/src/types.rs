use serde_json::Value;

/// One rerank call: the free-text query plus the candidate documents as
/// flat JSON objects, in candidate order.
#[derive(Debug, Clone)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<Value>,
    pub top_n: Option<usize>,
}

impl RerankRequest {
    pub fn new(query: impl Into<String>, documents: Vec<Value>) -> Self {
        Self {
            query: query.into(),
            documents,
            top_n: None,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }
}

/// Position of one candidate in the provider's relevance order. `index`
/// points back into the submitted document list.
#[derive(Debug, Clone)]
pub struct RerankItem {
    pub index: usize,
    pub score: f32,
}

/// Provider results, already sorted by descending relevance and truncated
/// to the requested result count.
#[derive(Debug, Clone)]
pub struct RerankResponse {
    pub provider: String,
    pub model: String,
    pub items: Vec<RerankItem>,
}
