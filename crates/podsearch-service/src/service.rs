use std::sync::Arc;

use podsearch_corpus::{load_all, load_combined, sample_default};
use podsearch_feed::FlatRecord;
use podsearch_rerank::{RerankItem, RerankProvider, RerankRequest};
use tracing::debug;

use crate::config::{CorpusSource, SearchConfig};
use crate::error::SearchError;

/// Query façade: re-reads the corpus, samples a bounded candidate pool,
/// and lets the injected provider order it. Stateless across calls;
/// concurrent queries share nothing mutable.
pub struct SearchService {
    config: SearchConfig,
    provider: Arc<dyn RerankProvider>,
}

impl SearchService {
    pub fn new(config: SearchConfig, provider: Arc<dyn RerankProvider>) -> Self {
        Self { config, provider }
    }

    /// Free-text search over the corpus. The query is forwarded verbatim,
    /// empty or not; relevance is entirely the provider's call.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<FlatRecord>, SearchError> {
        let corpus = self.load_corpus()?;
        let candidates = sample_default(corpus, self.config.candidate_pool);
        debug!(
            candidates = candidates.len(),
            limit,
            provider = self.provider.name(),
            "dispatching rerank"
        );
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let documents = candidates
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let request = RerankRequest::new(query, documents).with_top_n(limit);
        let response = self.provider.rerank(request).await?;
        resolve_ranked(candidates, &response.items, limit)
    }

    /// Every episode of the corpus, flattened, in load order.
    pub fn list_all(&self) -> Result<Vec<FlatRecord>, SearchError> {
        Ok(match &self.config.source {
            CorpusSource::Combined { path } => load_combined(path)?,
            CorpusSource::Directory { directory, pattern } => {
                load_all(directory, pattern, &self.config.rules)?.collect()
            }
        })
    }

    fn load_corpus(&self) -> Result<Box<dyn Iterator<Item = FlatRecord>>, SearchError> {
        Ok(match &self.config.source {
            CorpusSource::Combined { path } => Box::new(load_combined(path)?.into_iter()),
            CorpusSource::Directory { directory, pattern } => {
                Box::new(load_all(directory, pattern, &self.config.rules)?)
            }
        })
    }
}

/// Map each provider-returned index back to the candidate at that
/// position, keeping the provider's order. Out-of-range indices fail the
/// whole query.
pub fn resolve_ranked(
    candidates: Vec<FlatRecord>,
    ranked: &[RerankItem],
    limit: usize,
) -> Result<Vec<FlatRecord>, SearchError> {
    let len = candidates.len();
    ranked
        .iter()
        .take(limit)
        .map(|item| {
            candidates
                .get(item.index)
                .cloned()
                .ok_or(SearchError::RankIndexOutOfRange {
                    index: item.index,
                    len,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> FlatRecord {
        let mut flat = FlatRecord::new();
        flat.insert("title", title);
        flat
    }

    fn item(index: usize, score: f32) -> RerankItem {
        RerankItem { index, score }
    }

    #[test]
    fn resolve_keeps_provider_order() {
        let candidates = vec![record("A"), record("B"), record("C")];
        let ranked = [item(2, 0.9), item(0, 0.4)];
        let resolved = resolve_ranked(candidates, &ranked, 10).expect("resolve");
        assert_eq!(resolved, vec![record("C"), record("A")]);
    }

    #[test]
    fn resolve_caps_at_limit() {
        let candidates = vec![record("A"), record("B"), record("C")];
        let ranked = [item(1, 0.9), item(2, 0.8), item(0, 0.1)];
        let resolved = resolve_ranked(candidates, &ranked, 2).expect("resolve");
        assert_eq!(resolved, vec![record("B"), record("C")]);
    }

    #[test]
    fn out_of_range_index_fails_loudly() {
        let candidates = vec![record("A"), record("B")];
        let ranked = [item(5, 0.9)];
        let err = resolve_ranked(candidates, &ranked, 10)
            .err()
            .expect("index beyond candidates must fail");
        assert!(matches!(
            err,
            SearchError::RankIndexOutOfRange { index: 5, len: 2 }
        ));
    }
}
