//! Compiled regex patterns for the query engine.
//!
//! Static patterns are compiled once at first use with `LazyLock`.
//! Selector- and tag-dependent patterns are built here from escaped
//! input, so compilation cannot fail.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single tag, shortest match: `<` through the next `>`.
/// Used for flat markup stripping; nesting is opaque to it.
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG regex"));

/// Matches a leading doctype or other `<!…>` prelude, together with
/// the surrounding spaces, anchored at the start of normalized text.
pub static PRELUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *<![^>]*> *").expect("PRELUDE regex"));

/// Pattern for an attribute whose quoted value is exactly `value`.
/// Single and double quotes are both accepted.
pub fn exact_attribute(name: &str, value: &str) -> Regex {
    let pattern = format!(
        r#"{}=["']{}["']"#,
        regex::escape(name),
        regex::escape(value)
    );
    Regex::new(&pattern).expect("escaped attribute pattern")
}

/// Pattern for an attribute whose quoted value contains `value` as a
/// token among other space- or alphanumeric-delimited tokens, e.g. one
/// class name among several.
pub fn contains_attribute(name: &str, value: &str) -> Regex {
    let pattern = format!(
        r#"{}=["'][A-Za-z0-9 ]*{}[A-Za-z0-9 ]*["']"#,
        regex::escape(name),
        regex::escape(value)
    );
    Regex::new(&pattern).expect("escaped attribute pattern")
}

/// Pattern for the opening of a tag named `name`: the literal `<name`.
pub fn opening_tag(name: &str) -> Regex {
    let pattern = format!("<{}", regex::escape(name));
    Regex::new(&pattern).expect("escaped opening tag pattern")
}

/// Pattern matching either the literal closing tag `</name>` or the
/// literal opening `<name`, used by the span resolver's depth count.
pub fn tag_depth_pair(name: &str) -> Regex {
    let pattern = format!(
        "{}|{}",
        regex::escape(&format!("</{name}>")),
        regex::escape(&format!("<{name}"))
    );
    Regex::new(&pattern).expect("escaped tag pair pattern")
}
