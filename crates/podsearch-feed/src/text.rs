use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"<[^>]+>").expect("static tag pattern")
});

/// Strip markup tags from `text` and collapse whitespace runs into single
/// spaces. A missing value yields the empty string.
pub fn remove_html_tags(text: Option<&str>) -> String {
    match text {
        Some(text) => clean_text(text),
        None => String::new(),
    }
}

/// Same as [`remove_html_tags`] for a value that is known to be present.
pub fn clean_text(text: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
