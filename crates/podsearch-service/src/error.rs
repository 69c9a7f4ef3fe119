use podsearch_corpus::CorpusError;
use podsearch_rerank::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("search backend error: {0}")]
    Rerank(#[from] ProviderError),

    /// The scoring service pointed outside the candidate list; a protocol
    /// violation, never silently truncated.
    #[error("rerank index {index} out of range for {len} candidates")]
    RankIndexOutOfRange { index: usize, len: usize },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
