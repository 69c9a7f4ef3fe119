use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("no files matching {pattern} in {}", .directory.display())]
    NoMatchingFiles {
        directory: PathBuf,
        pattern: String,
    },

    #[error("invalid glob pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no dialect registered for file: {}", .0.display())]
    UnknownDialect(PathBuf),

    #[error("feed file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("feed file is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a list of items at rss.channel.item in {}", .0.display())]
    InvalidShape(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
