//! The `Query` value and its operations.

use std::fmt;

use crate::encoding;
use crate::error::{Error, Result};
use crate::patterns;
use crate::scan;
use crate::selector::Selector;
use crate::text;

/// An immutable query over a normalized slice of HTML text.
///
/// A `Query` wraps text believed to hold either a complete element
/// (`<tag …>…</tag>`), a fragment, or plain text. Element-only
/// operations ([`value`](Query::value), [`inner_html`](Query::inner_html),
/// [`flatten`](Query::flatten)) require the text to begin with `<` and
/// fail with [`Error::NotAnElement`] otherwise. Every derived value
/// owns its text; nothing is aliased or mutated across queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    source: String,
}

impl Query {
    /// Builds a query over `source`.
    ///
    /// Carriage returns, line feeds and tabs are normalized to single
    /// spaces, and one leading doctype/prelude (`<!…>`) is trimmed so
    /// span resolution starts at a real element boundary.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut normalized: String = source
            .chars()
            .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
            .collect();
        let prelude_end = patterns::PRELUDE.find(&normalized).map(|m| m.end());
        if let Some(end) = prelude_end {
            normalized.drain(..end);
        }
        Self { source: normalized }
    }

    /// Builds a query from raw bytes, detecting the charset from meta
    /// tags and transcoding to UTF-8 before normalization.
    #[must_use]
    pub fn from_bytes(source: &[u8]) -> Self {
        Self::new(&encoding::transcode_to_utf8(source))
    }

    /// Wraps text that is already normalized, for values derived from
    /// an existing query.
    fn from_normalized(source: String) -> Self {
        Self { source }
    }

    /// The normalized text this query wraps.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Selects all elements matching `selector`, descendants included.
    ///
    /// Selectors: `#id` (exact id), `.class` (class contains),
    /// `[attr]value` (attribute contains), or a bare tag name. A
    /// selector matching nothing yields an empty vector, never an
    /// error; a malformed selector is [`Error::SelectorFormat`].
    pub fn select(&self, selector: &str) -> Result<Vec<Query>> {
        self.select_with(selector, true)
    }

    /// Selects elements matching `selector`, optionally restricted to
    /// the top level.
    ///
    /// With `search_children` set to false the source is flattened
    /// first, so occurrences inside nested elements are excluded and
    /// any returned span is a substring of the flattened form.
    pub fn select_with(&self, selector: &str, search_children: bool) -> Result<Vec<Query>> {
        let pattern = Selector::parse(selector)?.pattern();
        let scope = if search_children {
            None
        } else {
            Some(self.flatten()?)
        };
        let haystack = scope.as_ref().map_or(self.source.as_str(), Query::source);

        let mut selected = Vec::new();
        for anchor in scan::occurrences(haystack, &pattern) {
            let start = scan::find_start_tag(haystack, anchor)?;
            let end = start + scan::find_end_tag(haystack, start)?;
            selected.push(Query::from_normalized(haystack[start..end].to_string()));
        }
        Ok(selected)
    }

    /// Reads the value of `attribute` from the element's markup.
    ///
    /// Only double-quoted attributes are recognized here; selector
    /// matching also accepts single quotes. The asymmetry is inherited
    /// behavior, kept deliberately and covered by tests.
    pub fn value(&self, attribute: &str) -> Result<Query> {
        if !self.source.starts_with('<') {
            return Err(Error::NotAnElement);
        }
        let needle = format!("{attribute}=\"");
        let at = self
            .source
            .find(&needle)
            .ok_or_else(|| Error::AttributeMissing(attribute.to_string()))?;
        let tail = &self.source[at + needle.len()..];
        let end = tail
            .find('"')
            .ok_or_else(|| Error::AttributeMissing(attribute.to_string()))?;
        Ok(Query::from_normalized(tail[..end].to_string()))
    }

    /// The markup between the element's opening and closing tags,
    /// trimmed.
    ///
    /// Fragments too short to hold any inner content (a closing tag
    /// shorter than expected, a degenerate span) yield an empty query
    /// rather than an error.
    pub fn inner_html(&self) -> Result<Query> {
        if !self.source.starts_with('<') {
            return Err(Error::NotAnElement);
        }
        let open_end = self.source.find('>').ok_or(Error::NoTagFound)? + 1;
        let close_len = scan::tag_name_at(&self.source, 0)?.len() + 3;
        if open_end + close_len > self.source.len() {
            return Ok(Query::from_normalized(String::new()));
        }
        let inner = &self.source[open_end..self.source.len() - close_len];
        Ok(Query::from_normalized(inner.trim().to_string()))
    }

    /// The element's inner content with every `<…>` occurrence removed
    /// in one flat pass.
    ///
    /// Tag syntax is opaque to this scan: it does not track nesting or
    /// depth, it only deletes markup delimiters. No entity decoding.
    pub fn inner_text(&self) -> Result<String> {
        let inner = self.inner_html()?;
        Ok(patterns::TAG.replace_all(inner.source(), "").into_owned())
    }

    /// The fully de-tagged text of the whole source, outer tags
    /// included, with HTML entities decoded.
    #[must_use]
    pub fn strip_html(&self) -> String {
        let stripped = patterns::TAG.replace_all(&self.source, "");
        text::decode_entities(&stripped)
    }

    /// Reduces the element to its own opening/closing tags plus its
    /// direct text, discarding every descendant element together with
    /// the text nested inside it.
    ///
    /// Plain text (no `<` anywhere) is returned unchanged. Flattening
    /// an already flat fragment is a no-op, and an element whose
    /// content is nothing but nested elements flattens to empty inner
    /// content.
    pub fn flatten(&self) -> Result<Query> {
        if !self.source.contains('<') {
            return Ok(self.clone());
        }
        if !self.source.starts_with('<') {
            return Err(Error::NotAnElement);
        }

        let end = scan::find_end_tag(&self.source, 0)?;
        let top = Query::from_normalized(self.source[..end].to_string());
        let open_end = top.source.find('>').map_or(top.source.len(), |i| i + 1);
        let open_tag = &top.source[..open_end];
        let close_tag = format!("</{}>", scan::tag_name_at(&top.source, 0)?);

        let inner = top.inner_html()?;
        let mut rest = inner.source();
        let mut direct = String::new();
        while let Some(at) = rest.find('<') {
            direct.push_str(&rest[..at]);
            // Skip the entire child subtree: open tag, nested content,
            // close tag. None of its text is kept.
            let skipped = scan::find_end_tag(rest, at)?;
            rest = &rest[at + skipped..];
        }
        direct.push_str(rest);

        Ok(Query::from_normalized(format!(
            "{open_tag}{}{close_tag}",
            direct.trim()
        )))
    }
}

/// Renders the underlying normalized text verbatim.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
