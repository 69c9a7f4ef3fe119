pub mod dialect;
pub mod flatten;
pub mod record;
pub mod text;

pub use dialect::Dialect;
pub use flatten::{flatten_generic, flatten_recursive};
pub use record::FlatRecord;
pub use text::remove_html_tags;
