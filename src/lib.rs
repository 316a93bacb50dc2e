//! # html-query
//!
//! Lightweight CSS-like selector queries over raw HTML text.
//!
//! Given a block of HTML and a selector (`#id`, `.class`, `[attr]value`,
//! or a bare tag name), this crate returns the substrings of the
//! matching elements without ever building a DOM tree. Elements are
//! located by pattern matching over the linear text and resolved to
//! balanced spans by a forward scan with a depth counter, which handles
//! same-named nested tags and falls back gracefully on unterminated
//! ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_query::Query;
//!
//! let doc = Query::new(
//!     r#"<html><body><div id="greeting">Hello <b>World</b></div></body></html>"#,
//! );
//!
//! let found = doc.select("#greeting")?;
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].inner_text()?, "Hello World");
//! # Ok::<(), html_query::Error>(())
//! ```
//!
//! ## Scope
//!
//! This is not a conformant HTML5 parser. It does not tokenize per the
//! HTML spec, build a tree, or repair arbitrary malformed markup; it
//! operates purely on linear text with a few documented fallbacks, and
//! selecting an element that does not exist is simply an empty result.

mod encoding;
mod error;
mod patterns;
mod query;
mod scan;
mod selector;
mod text;

// Public API - re-exports
pub use error::{Error, Result};
pub use query::Query;
pub use selector::Selector;
pub use text::between;
