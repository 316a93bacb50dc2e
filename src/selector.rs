//! Selector parsing and translation.
//!
//! A selector string is classified by its first character: `#id`,
//! `.class`, `[attr]value`, or a bare tag name. Each form translates to
//! a regex matching an element's *opening tag* in normalized source
//! text. Id selectors match the attribute value exactly; class and
//! attribute selectors are contains matches, so the value may sit among
//! other tokens inside the quotes.

use regex::Regex;

use crate::error::{Error, Result};
use crate::patterns;

/// Parsed form of a selector string. Exists only for the duration of a
/// single selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#x` - element whose `id` attribute is exactly `x`.
    Id(String),
    /// `.x` - element whose `class` attribute contains `x`.
    Class(String),
    /// `[name]value` - element whose `name` attribute contains `value`.
    Attribute {
        /// The attribute name between the brackets.
        name: String,
        /// The value the attribute must contain.
        value: String,
    },
    /// Bare name - element with tag name `name`.
    Tag(String),
}

impl Selector {
    /// Parses a selector string.
    ///
    /// Fails with [`Error::SelectorFormat`] when the selector is empty
    /// or an attribute selector is missing its closing `]`.
    pub fn parse(selector: &str) -> Result<Self> {
        let mut chars = selector.chars();
        match chars.next() {
            None => Err(Error::SelectorFormat("empty selector".to_string())),
            Some('#') => Ok(Self::Id(chars.as_str().to_string())),
            Some('.') => Ok(Self::Class(chars.as_str().to_string())),
            Some('[') => {
                let rest = chars.as_str();
                let close = rest.find(']').ok_or_else(|| {
                    Error::SelectorFormat(format!("missing `]` in `{selector}`"))
                })?;
                Ok(Self::Attribute {
                    name: rest[..close].to_string(),
                    value: rest[close + 1..].to_string(),
                })
            }
            Some(_) => Ok(Self::Tag(selector.to_string())),
        }
    }

    /// Compiles the opening-tag pattern this selector translates to.
    #[must_use]
    pub fn pattern(&self) -> Regex {
        match self {
            Self::Id(value) => patterns::exact_attribute("id", value),
            Self::Class(value) => patterns::contains_attribute("class", value),
            Self::Attribute { name, value } => patterns::contains_attribute(name, value),
            Self::Tag(name) => patterns::opening_tag(name),
        }
    }
}
