pub mod config;
pub mod error;
pub mod response;
pub mod service;

pub use config::{CorpusSource, SearchConfig};
pub use error::SearchError;
pub use response::{EpisodesResponse, SearchResponse};
pub use service::{resolve_ranked, SearchService};
