use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use podsearch_corpus::{load_all, CorpusError, DialectRules};
use podsearch_rerank::{
    ProviderError, RerankItem, RerankProvider, RerankRequest, RerankResponse,
};
use podsearch_service::{SearchConfig, SearchError, SearchService};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(1);

fn temp_data_dir() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();
    let dir = std::env::temp_dir().join(format!("podsearch-service-test-{pid}-{now}-{seq}"));
    fs::create_dir_all(&dir).expect("create temp data dir");
    dir
}

/// Scripted provider: returns a fixed ranking and remembers every request
/// it was handed.
struct ScriptedRerank {
    items: Vec<RerankItem>,
    seen: Mutex<Vec<RerankRequest>>,
}

impl ScriptedRerank {
    fn new(items: Vec<(usize, f32)>) -> Arc<Self> {
        Arc::new(Self {
            items: items
                .into_iter()
                .map(|(index, score)| RerankItem { index, score })
                .collect(),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last_request(&self) -> RerankRequest {
        self.seen
            .lock()
            .expect("seen lock")
            .last()
            .cloned()
            .expect("provider was never called")
    }
}

#[async_trait]
impl RerankProvider for ScriptedRerank {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        self.seen.lock().expect("seen lock").push(request);
        Ok(RerankResponse {
            provider: "scripted".to_string(),
            model: "scripted".to_string(),
            items: self.items.clone(),
        })
    }
}

fn write_two_file_corpus(dir: &PathBuf) {
    fs::write(
        dir.join("mckinsey_1.json"),
        r#"{"rss": {"channel": {"item": [
            {"title": ["<b>Deals in practice</b>"], "summary": "<p>merger talk</p>"}
        ]}}}"#,
    )
    .expect("write mckinsey fixture");
    fs::write(
        dir.join("hbr_1.json"),
        r#"{"rss": {"channel": {"item": [
            {"title": "Leading quietly", "meta": {"tags": ["leadership"]}}
        ]}}}"#,
    )
    .expect("write hbr fixture");
}

fn write_combined_feed(path: &PathBuf, titles: &[&str]) {
    let items: Vec<String> = titles
        .iter()
        .map(|t| format!(r#"{{"title": ["{t}"]}}"#))
        .collect();
    fs::write(
        path,
        format!(r#"{{"rss": {{"channel": {{"item": [{}]}}}}}}"#, items.join(",")),
    )
    .expect("write combined feed");
}

#[tokio::test]
async fn end_to_end_search_returns_a_corpus_record() {
    let dir = temp_data_dir();
    write_two_file_corpus(&dir);

    let corpus: Vec<_> = load_all(&dir, "*.json", &DialectRules::builtin())
        .expect("load corpus")
        .collect();
    assert_eq!(corpus.len(), 2);

    let provider = ScriptedRerank::new(vec![(0, 1.0)]);
    let service = SearchService::new(SearchConfig::directory(&dir), provider.clone());

    let results = service.search("x", 1).await.expect("search");
    assert_eq!(results.len(), 1);
    assert!(corpus.contains(&results[0]));

    let request = provider.last_request();
    assert_eq!(request.query, "x");
    assert_eq!(request.documents.len(), 2);
    assert_eq!(request.top_n, Some(1));

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn scripted_ranking_orders_the_results() {
    let dir = temp_data_dir();
    let feed = dir.join("podcasts.json");
    write_combined_feed(&feed, &["Alpha", "Beta", "Gamma"]);

    // Pool larger than the corpus keeps candidates in load order.
    let provider = ScriptedRerank::new(vec![(2, 0.9), (0, 0.4)]);
    let service = SearchService::new(SearchConfig::combined(&feed), provider);

    let results = service.search("growth", 5).await.expect("search");
    let titles: Vec<_> = results
        .iter()
        .filter_map(|r| r.get("title").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(titles, vec!["Gamma", "Alpha"]);

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn out_of_range_provider_index_fails_the_query() {
    let dir = temp_data_dir();
    write_two_file_corpus(&dir);

    let provider = ScriptedRerank::new(vec![(9, 1.0)]);
    let service = SearchService::new(SearchConfig::directory(&dir), provider);

    let err = service
        .search("x", 1)
        .await
        .err()
        .expect("out-of-range index must fail");
    assert!(matches!(
        err,
        SearchError::RankIndexOutOfRange { index: 9, len: 2 }
    ));

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn empty_query_is_forwarded_verbatim() {
    let dir = temp_data_dir();
    write_two_file_corpus(&dir);

    let provider = ScriptedRerank::new(vec![(1, 0.5)]);
    let service = SearchService::new(SearchConfig::directory(&dir), provider.clone());

    service.search("", 1).await.expect("search");
    assert_eq!(provider.last_request().query, "");

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn missing_directory_surfaces_a_corpus_error() {
    let dir = temp_data_dir().join("absent");
    let provider = ScriptedRerank::new(vec![(0, 1.0)]);
    let service = SearchService::new(SearchConfig::directory(&dir), provider);

    let err = service
        .search("x", 1)
        .await
        .err()
        .expect("missing directory must fail");
    assert!(matches!(
        err,
        SearchError::Corpus(CorpusError::DirectoryNotFound(_))
    ));
}

#[test]
fn list_all_reads_the_combined_feed() {
    let dir = temp_data_dir();
    let feed = dir.join("podcasts.json");
    write_combined_feed(&feed, &["Alpha", "Beta"]);

    let provider = ScriptedRerank::new(vec![]);
    let service = SearchService::new(SearchConfig::combined(&feed), provider);

    let episodes = service.list_all().expect("list_all");
    assert_eq!(episodes.len(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn list_all_reads_a_directory_corpus() {
    let dir = temp_data_dir();
    write_two_file_corpus(&dir);

    let provider = ScriptedRerank::new(vec![]);
    let service = SearchService::new(SearchConfig::directory(&dir), provider);

    let episodes = service.list_all().expect("list_all");
    assert_eq!(episodes.len(), 2);

    fs::remove_dir_all(&dir).ok();
}
