use serde_json::{Map, Value};

use crate::record::FlatRecord;
use crate::text::clean_text;

const PREFIX_KEY: &str = "__prefix";
const TEXT_KEY: &str = "__text";
const KEY_SEP: char = '_';

/// Flatten one item of the generic ("mckinsey-style") dialect.
///
/// Field shapes handled: `{__prefix, __text}` maps, `title`/`content`
/// lists, plain scalars, and one level of dunder sub-keys. Anything else
/// is dropped on purpose; the dialect is lossy.
pub fn flatten_generic(item: &Map<String, Value>) -> FlatRecord {
    let mut flat = FlatRecord::new();
    for (key, value) in item {
        match value {
            Value::Object(map) if is_prefixed_text(map) => {
                insert_prefixed(&mut flat, key, map);
            }
            Value::Array(elements) => match key.as_str() {
                "title" => flatten_title(&mut flat, key, elements),
                "content" => flatten_content(&mut flat, key, elements),
                _ => {}
            },
            Value::String(text) => flat.insert(key.as_str(), clean_text(text)),
            Value::Number(_) | Value::Bool(_) => flat.insert(key.as_str(), value.clone()),
            Value::Object(map) => {
                for (sub_key, sub_value) in map {
                    if sub_key.starts_with("__") {
                        insert_scalar(&mut flat, format!("{key}{sub_key}"), sub_value, true);
                    }
                }
            }
            Value::Null => {}
        }
    }
    flat
}

/// Flatten one item of the recursive ("hbr-style") dialect: every nested
/// map and list is walked, keys joined with `_`, list positions become
/// numeric key segments.
pub fn flatten_recursive(item: &Value) -> FlatRecord {
    let mut flat = FlatRecord::new();
    recurse(&mut flat, None, item);
    flat
}

fn is_prefixed_text(map: &Map<String, Value>) -> bool {
    map.contains_key(PREFIX_KEY) && map.contains_key(TEXT_KEY)
}

fn insert_prefixed(flat: &mut FlatRecord, key: &str, map: &Map<String, Value>) {
    let (Some(Value::String(prefix)), Some(text)) = (map.get(PREFIX_KEY), map.get(TEXT_KEY))
    else {
        return;
    };
    insert_scalar(flat, format!("{key}__{prefix}"), text, false);
}

fn flatten_title(flat: &mut FlatRecord, key: &str, elements: &[Value]) {
    match elements.first() {
        Some(Value::Object(map)) if is_prefixed_text(map) => insert_prefixed(flat, key, map),
        Some(Value::String(text)) => flat.insert(key, clean_text(text)),
        Some(other) => insert_scalar(flat, key.to_string(), other, false),
        None => {}
    }
}

fn flatten_content(flat: &mut FlatRecord, key: &str, elements: &[Value]) {
    for (index, element) in elements.iter().enumerate() {
        let Value::Object(attrs) = element else {
            continue;
        };
        for (attr, attr_value) in attrs {
            if attr.starts_with('_') {
                insert_scalar(flat, format!("{key}{KEY_SEP}{index}{KEY_SEP}{attr}"), attr_value, false);
            } else if attr == "player" {
                if let Some(url) = attr_value.get("_url") {
                    insert_scalar(
                        flat,
                        format!("{key}{KEY_SEP}{index}{KEY_SEP}player_url"),
                        url,
                        false,
                    );
                }
            }
        }
    }
}

/// Insert `value` if it is a leaf, optionally running strings through the
/// normalizer. Containers are skipped rather than nested.
fn insert_scalar(flat: &mut FlatRecord, key: String, value: &Value, normalize: bool) {
    match value {
        Value::String(text) if normalize => flat.insert(key, clean_text(text)),
        Value::Null if normalize => flat.insert(key, String::new()),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => flat.insert(key, value.clone()),
        Value::Null | Value::Object(_) | Value::Array(_) => {}
    }
}

fn recurse(flat: &mut FlatRecord, parent: Option<&str>, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let joined = join_key(parent, key);
                match child {
                    Value::Object(_) | Value::Array(_) => recurse(flat, Some(&joined), child),
                    Value::String(text) => flat.insert(joined, clean_text(text)),
                    // Absent map values normalize to the empty string.
                    Value::Null => flat.insert(joined, String::new()),
                    leaf => flat.insert(joined, leaf.clone()),
                }
            }
        }
        Value::Array(elements) => {
            for (index, child) in elements.iter().enumerate() {
                let joined = join_key(parent, &index.to_string());
                match child {
                    Value::Object(_) | Value::Array(_) => recurse(flat, Some(&joined), child),
                    // List elements are already derived values, not free
                    // text; they pass through untouched.
                    leaf => flat.insert(joined, leaf.clone()),
                }
            }
        }
        _ => {}
    }
}

fn join_key(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{KEY_SEP}{key}"),
        None => key.to_string(),
    }
}
