//! Small string helpers consumed around the query engine.

use htmlentity::entity::{decode, ICodedDataTrait};

/// Decodes HTML character entities (`&amp;`, `&#124;`, `&#x7C;`, …) to
/// literal characters. Input that fails to decode is returned
/// unchanged.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    decode(input.as_bytes())
        .to_string()
        .unwrap_or_else(|_| input.to_string())
}

/// The substring strictly between the first `from` and the following
/// `to`, or `None` when either delimiter is missing.
///
/// Handy for picking values out of attribute text, e.g. the URL inside
/// `background:url(bg.jpg)`.
#[must_use]
pub fn between(input: &str, from: char, to: char) -> Option<&str> {
    let start = input.find(from)? + from.len_utf8();
    let end = input[start..].find(to)?;
    Some(&input[start..start + end])
}
