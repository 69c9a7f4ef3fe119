pub mod error;
pub mod loader;
pub mod sampler;
pub mod stream;

pub use error::CorpusError;
pub use loader::{DialectRules, load_all, load_combined, load_one};
pub use sampler::{DEFAULT_CANDIDATE_POOL, sample, sample_default};
pub use stream::CorpusStream;
