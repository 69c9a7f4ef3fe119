use std::path::PathBuf;

use podsearch_corpus::{DialectRules, DEFAULT_CANDIDATE_POOL};

/// Where the corpus comes from: a directory of per-provider dumps or one
/// canonical pre-merged feed file.
#[derive(Debug, Clone)]
pub enum CorpusSource {
    Directory { directory: PathBuf, pattern: String },
    Combined { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub source: CorpusSource,
    pub rules: DialectRules,
    /// Candidates drawn per query, independent of the requested limit.
    pub candidate_pool: usize,
}

impl SearchConfig {
    pub fn directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            source: CorpusSource::Directory {
                directory: directory.into(),
                pattern: "*.json".to_string(),
            },
            rules: DialectRules::builtin(),
            candidate_pool: DEFAULT_CANDIDATE_POOL,
        }
    }

    pub fn combined(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CorpusSource::Combined { path: path.into() },
            rules: DialectRules::builtin(),
            candidate_pool: DEFAULT_CANDIDATE_POOL,
        }
    }

    /// Configuration from `PODSEARCH_*` environment variables, falling
    /// back to the on-disk layout the feed dumps ship with.
    pub fn from_env() -> Self {
        if let Some(path) = env_string("PODSEARCH_COMBINED_FILE") {
            return Self::combined(path).with_pool_from_env();
        }
        let directory = env_string("PODSEARCH_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let pattern = env_string("PODSEARCH_FILE_PATTERN").unwrap_or_else(|| "*.json".to_string());
        Self {
            source: CorpusSource::Directory {
                directory: directory.into(),
                pattern,
            },
            rules: DialectRules::builtin(),
            candidate_pool: DEFAULT_CANDIDATE_POOL,
        }
        .with_pool_from_env()
    }

    pub fn with_candidate_pool(mut self, candidate_pool: usize) -> Self {
        self.candidate_pool = candidate_pool;
        self
    }

    pub fn with_rules(mut self, rules: DialectRules) -> Self {
        self.rules = rules;
        self
    }

    fn with_pool_from_env(mut self) -> Self {
        if let Some(pool) = env_string("PODSEARCH_CANDIDATE_POOL") {
            if let Ok(pool) = pool.parse::<usize>() {
                if pool > 0 {
                    self.candidate_pool = pool;
                }
            }
        }
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
