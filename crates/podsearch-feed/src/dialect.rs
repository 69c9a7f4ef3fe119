use serde_json::Value;

use crate::flatten::{flatten_generic, flatten_recursive};
use crate::record::FlatRecord;

/// Provider-specific feed item shape. Each dialect owns its flattening
/// rules; dispatch is always by an explicit tag, never by sniffing item
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Prefixed-text dialect used by the mckinsey-style dumps.
    Generic,
    /// Fully recursive dialect used by the hbr-style dumps.
    Recursive,
}

impl Dialect {
    pub fn flatten(self, item: &Value) -> FlatRecord {
        match self {
            Self::Generic => match item {
                Value::Object(map) => flatten_generic(map),
                _ => FlatRecord::new(),
            },
            Self::Recursive => flatten_recursive(item),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Recursive => "recursive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatch_routes_to_the_right_flattener() {
        let item = json!({"a": {"b": 1}});
        let generic = Dialect::Generic.flatten(&item);
        let recursive = Dialect::Recursive.flatten(&item);
        assert!(generic.get("a_b").is_none());
        assert_eq!(recursive.get("a_b"), Some(&json!(1)));
    }

    #[test]
    fn generic_dialect_ignores_non_object_items() {
        assert!(Dialect::Generic.flatten(&json!([1, 2])).is_empty());
    }
}
