//! Linear-text scanning: occurrence location and span resolution.
//!
//! The engine never builds a tree. A selection anchors on byte offsets
//! produced by an inclusive split of the source, and an element's span
//! is resolved by one forward walk with a depth counter over literal
//! open/close tag patterns. Every offset produced here falls on an
//! ASCII byte of tag syntax, so slicing stays on char boundaries even
//! when the surrounding text is arbitrary UTF-8.

use regex::Regex;

use crate::error::{Error, Result};
use crate::patterns;

/// One segment of an inclusive split: either a delimiter match or the
/// text between two matches.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// The segment's text.
    pub text: &'a str,
    /// Whether this segment is a delimiter match.
    pub is_match: bool,
}

/// Splits `text` on `pattern`, keeping the delimiter matches as
/// segments of their own. Unlike an ordinary split no text is
/// discarded: concatenating the segments yields `text` back.
pub fn inclusive_split<'a>(text: &'a str, pattern: &Regex) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment {
                text: &text[last..found.start()],
                is_match: false,
            });
        }
        segments.push(Segment {
            text: found.as_str(),
            is_match: true,
        });
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment {
            text: &text[last..],
            is_match: false,
        });
    }
    segments
}

/// Returns an anchor offset for every `pattern` match in `text`: the
/// cumulative offset just before the matched segment, plus one. The +1
/// puts the anchor strictly past the matched tag's own `<`, so the
/// backward scan in [`find_start_tag`] lands on that `<` and not on one
/// belonging to an enclosing or preceding tag.
///
/// No match yields an empty vector; that is the normal outcome for a
/// selector with nothing to select, not an error.
pub fn occurrences(text: &str, pattern: &Regex) -> Vec<usize> {
    let mut anchors = Vec::new();
    let mut consumed = 0;
    for segment in inclusive_split(text, pattern) {
        if segment.is_match {
            anchors.push(consumed + 1);
        }
        consumed += segment.text.len();
    }
    anchors
}

/// Offset of the nearest `<` strictly before `anchor`.
pub fn find_start_tag(text: &str, anchor: usize) -> Result<usize> {
    text[..anchor].rfind('<').ok_or(Error::NoTagFound)
}

/// The tag name at `start`: the text after `<`, leading spaces skipped,
/// up to the first space or `>`.
pub fn tag_name_at(text: &str, start: usize) -> Result<&str> {
    let after = text[start..]
        .strip_prefix('<')
        .ok_or(Error::NoTagFound)?
        .trim_start();
    let end = after.find([' ', '>']).ok_or(Error::NoTagFound)?;
    Ok(&after[..end])
}

/// Resolves the end of the element whose opening `<` sits at `start`.
/// Returns the offset just past the matching close tag, relative to
/// `start`.
///
/// The walk splits the remaining text inclusively on the literal
/// `</name>` / `<name` pair and counts depth: opens increment, closes
/// decrement, and the accumulated segment length at depth zero is the
/// span end. When the text runs out with tags still open (a void
/// element like a line break, or malformed markup), the span falls
/// back to the first nested open tag - or the whole remaining text if
/// none was seen - treating the element as self-closing. The fallback
/// span is degenerate on genuinely unbalanced markup; that leniency is
/// deliberate.
pub fn find_end_tag(text: &str, start: usize) -> Result<usize> {
    let working = &text[start..];
    if !working.starts_with('<') {
        return Err(Error::NoTagFound);
    }

    let name = tag_name_at(text, start)?;
    let close = format!("</{name}>");
    let pattern = patterns::tag_depth_pair(name);

    let mut depth: usize = 0;
    let mut consumed = 0;
    let mut first_nested_open = None;

    for segment in inclusive_split(working, &pattern) {
        if segment.is_match {
            if segment.text == close {
                depth = depth.saturating_sub(1);
            } else {
                if depth > 0 && first_nested_open.is_none() {
                    first_nested_open = Some(consumed);
                }
                depth += 1;
            }
        }
        consumed += segment.text.len();
        if segment.is_match && depth == 0 {
            return Ok(consumed);
        }
    }

    if depth > 0 {
        // Unterminated tag: synthesize a minimal span.
        return Ok(first_nested_open.unwrap_or(consumed));
    }
    Err(Error::NoTagFound)
}
