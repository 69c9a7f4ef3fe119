use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::sync::{Arc, Mutex};
use std::thread;

use podsearch_feed::{Dialect, FlatRecord};
use serde_json::Value;
use tracing::{error, warn};

use crate::error::CorpusError;
use crate::stream::CorpusStream;

const ITEM_POINTER: &str = "/rss/channel/item";
const CHANNEL_CAPACITY: usize = 64;

/// Maps file names to the dialect their items are shaped in. Rules are
/// substring markers checked in insertion order; a file matching no rule
/// is an error at load time, never a silent skip.
#[derive(Debug, Clone, Default)]
pub struct DialectRules {
    rules: Vec<(String, Dialect)>,
}

impl DialectRules {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The two provider conventions shipped with the feed dumps.
    pub fn builtin() -> Self {
        Self::new()
            .with_rule("hbr", Dialect::Recursive)
            .with_rule("mckinsey", Dialect::Generic)
    }

    pub fn with_rule(mut self, marker: impl Into<String>, dialect: Dialect) -> Self {
        self.rules.push((marker.into(), dialect));
        self
    }

    pub fn resolve(&self, path: &Path) -> Option<Dialect> {
        let name = path.file_name()?.to_str()?;
        self.rules
            .iter()
            .find(|(marker, _)| name.contains(marker.as_str()))
            .map(|(_, dialect)| *dialect)
    }
}

/// Load one feed-dump file with batch tolerance: empty, malformed, or
/// wrongly shaped files yield zero records and a log line instead of an
/// error, so a bad file never aborts a multi-file load.
pub fn load_one(path: &Path, dialect: Dialect) -> impl Iterator<Item = FlatRecord> + use<> {
    read_items_tolerant(path)
        .into_iter()
        .map(move |item| dialect.flatten(&item))
}

/// Load every file in `directory` matching `pattern`, flattening each
/// concurrently across a worker pool and concatenating the per-file
/// outputs in sorted file order into one lazy stream.
pub fn load_all(
    directory: &Path,
    pattern: &str,
    rules: &DialectRules,
) -> Result<CorpusStream, CorpusError> {
    if !directory.is_dir() {
        return Err(CorpusError::DirectoryNotFound(directory.to_path_buf()));
    }

    let full_pattern = directory.join(pattern).to_string_lossy().into_owned();
    let entries = glob::glob(&full_pattern).map_err(|source| CorpusError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries.filter_map(Result::ok).collect();
    files.sort();

    if files.is_empty() {
        return Err(CorpusError::NoMatchingFiles {
            directory: directory.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    // Resolve every dialect up front so an unrecognized file fails the
    // whole load before any worker starts.
    let mut tasks = Vec::with_capacity(files.len());
    for path in files {
        let dialect = rules
            .resolve(&path)
            .ok_or_else(|| CorpusError::UnknownDialect(path.clone()))?;
        tasks.push((path, dialect));
    }

    Ok(spawn_loaders(tasks))
}

/// Strict loader for the single canonical pre-merged feed file. Unlike
/// [`load_one`], every failure here is surfaced as a distinct error.
pub fn load_combined(path: &Path) -> Result<Vec<FlatRecord>, CorpusError> {
    if !path.is_file() {
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(CorpusError::EmptyFile(path.to_path_buf()));
    }
    let document: Value =
        serde_json::from_str(&content).map_err(|source| CorpusError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    let items = match document.pointer(ITEM_POINTER) {
        Some(Value::Array(items)) => items,
        _ => return Err(CorpusError::InvalidShape(path.to_path_buf())),
    };
    Ok(items
        .iter()
        .map(|item| Dialect::Generic.flatten(item))
        .collect())
}

fn read_items_tolerant(path: &Path) -> Vec<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read feed file");
            return Vec::new();
        }
    };
    if content.trim().is_empty() {
        warn!(path = %path.display(), "empty feed file");
        return Vec::new();
    }
    let document: Value = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(err) => {
            warn!(path = %path.display(), %err, "malformed JSON in feed file");
            return Vec::new();
        }
    };
    match document.pointer(ITEM_POINTER) {
        Some(Value::Array(items)) => items.clone(),
        Some(_) => {
            error!(path = %path.display(), "rss.channel.item is not a list");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Fan-out: one task per file on a pool sized to available parallelism;
/// fan-in: per-file bounded channels stitched together in task order.
fn spawn_loaders(tasks: Vec<(PathBuf, Dialect)>) -> CorpusStream {
    let mut receivers: Vec<Receiver<FlatRecord>> = Vec::with_capacity(tasks.len());
    let mut queue: VecDeque<(SyncSender<FlatRecord>, PathBuf, Dialect)> =
        VecDeque::with_capacity(tasks.len());
    for (path, dialect) in tasks {
        let (sender, receiver) = sync_channel(CHANNEL_CAPACITY);
        receivers.push(receiver);
        queue.push_back((sender, path, dialect));
    }

    let workers = thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
        .min(queue.len())
        .max(1);
    let queue = Arc::new(Mutex::new(queue));

    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            loop {
                let task = match queue.lock() {
                    Ok(mut queue) => queue.pop_front(),
                    Err(_) => None,
                };
                let Some((sender, path, dialect)) = task else {
                    break;
                };
                for record in load_one(&path, dialect) {
                    // Consumer dropped the stream; abandon this file.
                    if sender.send(record).is_err() {
                        break;
                    }
                }
            }
        });
    }

    CorpusStream::from_receivers(receivers)
}
