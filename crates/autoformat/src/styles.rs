// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Block types, inline styles and the custom style map.
//!
//! The string forms of these types are part of the persisted snapshot
//! format and must not change:
//!
//! | Kind   | Name               | Meaning                     |
//! |--------|--------------------|-----------------------------|
//! | Block  | `"header-one"`     | Level one heading           |
//! | Inline | `"BOLD"`           | Bold weight                 |
//! | Inline | `"UNDERLINE"`      | Underline decoration        |
//! | Inline | `"red"`            | Custom style, red text      |

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The paragraph-level type of a block.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    Blockquote,
    CodeBlock,
    UnorderedListItem,
    OrderedListItem,
    Atomic,
}

impl BlockType {
    /// Heading level (1-6) for header block types.
    pub fn header_level(&self) -> Option<u8> {
        match self {
            Self::HeaderOne => Some(1),
            Self::HeaderTwo => Some(2),
            Self::HeaderThree => Some(3),
            Self::HeaderFour => Some(4),
            Self::HeaderFive => Some(5),
            Self::HeaderSix => Some(6),
            _ => None,
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::UnorderedListItem | Self::OrderedListItem)
    }
}

/// A style applied to a range of characters.
///
/// The five built-in styles have fixed upper-case names. Any other name is
/// a custom style whose rendering comes from the [`StyleMap`].
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Custom(String),
}

impl InlineStyle {
    /// Build a style from its persisted name. Built-in names map to the
    /// built-in variants.
    pub fn named(name: &str) -> Self {
        match name {
            "BOLD" => Self::Bold,
            "ITALIC" => Self::Italic,
            "UNDERLINE" => Self::Underline,
            "CODE" => Self::Code,
            "STRIKETHROUGH" => Self::Strikethrough,
            other => Self::Custom(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
            Self::Code => "CODE",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// HTML tag used to render a built-in style.
    pub(crate) fn html_tag(&self) -> Option<&'static str> {
        match self {
            Self::Bold => Some("strong"),
            Self::Italic => Some("em"),
            Self::Underline => Some("u"),
            Self::Code => Some("code"),
            Self::Strikethrough => Some("del"),
            Self::Custom(_) => None,
        }
    }
}

impl From<String> for InlineStyle {
    fn from(name: String) -> Self {
        Self::named(&name)
    }
}

impl From<&str> for InlineStyle {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<InlineStyle> for String {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::Custom(name) => name,
            builtin => builtin.name().to_owned(),
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of inline styles carried by a single character.
pub type StyleSet = BTreeSet<InlineStyle>;

/// CSS for custom inline styles, keyed by style name.
///
/// Property names are written in camelCase (`textDecoration`) and rendered
/// as kebab-case CSS (`text-decoration`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, BTreeMap<String, String>>);

impl StyleMap {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add (or replace) a CSS property for `style`.
    pub fn with_property(
        mut self,
        style: &str,
        property: &str,
        value: &str,
    ) -> Self {
        self.0
            .entry(style.to_owned())
            .or_default()
            .insert(property.to_owned(), value.to_owned());
        self
    }

    pub fn contains(&self, style: &InlineStyle) -> bool {
        self.0.contains_key(style.name())
    }

    /// Inline CSS declarations for `style`, e.g. `"color: red"`.
    pub fn css_for(&self, style: &InlineStyle) -> Option<String> {
        let properties = self.0.get(style.name())?;
        let declarations: Vec<String> = properties
            .iter()
            .map(|(property, value)| {
                format!("{}: {value}", camel_to_kebab(property))
            })
            .collect();
        Some(declarations.join("; "))
    }
}

/// The widget's custom styles: `red` text and a lower-case `underline`.
impl Default for StyleMap {
    fn default() -> Self {
        Self::empty()
            .with_property("red", "color", "red")
            .with_property("underline", "textDecoration", "underline")
    }
}

fn camel_to_kebab(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn block_type_names_are_kebab_case() {
        assert_eq!(BlockType::HeaderOne.to_string(), "header-one");
        assert_eq!(
            BlockType::UnorderedListItem.as_ref(),
            "unordered-list-item"
        );
        assert_eq!(
            BlockType::from_str("code-block").ok(),
            Some(BlockType::CodeBlock)
        );
        assert!(BlockType::from_str("header-seven").is_err());
    }

    #[test]
    fn block_type_serializes_like_its_name() {
        let json = serde_json::to_string(&BlockType::HeaderOne).unwrap();
        assert_eq!(json, "\"header-one\"");
        let parsed: BlockType = serde_json::from_str("\"blockquote\"").unwrap();
        assert_eq!(parsed, BlockType::Blockquote);
    }

    #[test]
    fn builtin_style_names_round_trip() {
        for name in ["BOLD", "ITALIC", "UNDERLINE", "CODE", "STRIKETHROUGH"] {
            let style = InlineStyle::named(name);
            assert!(style.is_builtin(), "{name} should be built in");
            assert_eq!(style.name(), name);
        }
    }

    #[test]
    fn unknown_style_names_are_custom() {
        let style = InlineStyle::from("red");
        assert_eq!(style, InlineStyle::Custom("red".to_owned()));
        assert_eq!(String::from(style), "red");
    }

    #[test]
    fn style_names_are_case_sensitive() {
        assert_eq!(
            InlineStyle::named("underline"),
            InlineStyle::Custom("underline".to_owned())
        );
    }

    #[test]
    fn inline_style_serializes_as_plain_string() {
        let json = serde_json::to_string(&InlineStyle::Bold).unwrap();
        assert_eq!(json, "\"BOLD\"");
        let parsed: InlineStyle = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, InlineStyle::Custom("red".to_owned()));
    }

    #[test]
    fn default_style_map_renders_red() {
        let map = StyleMap::default();
        assert_eq!(
            map.css_for(&InlineStyle::from("red")).as_deref(),
            Some("color: red")
        );
        assert_eq!(
            map.css_for(&InlineStyle::from("underline")).as_deref(),
            Some("text-decoration: underline")
        );
        assert_eq!(map.css_for(&InlineStyle::Bold), None);
    }

    #[test]
    fn multiple_properties_are_joined() {
        let map = StyleMap::empty()
            .with_property("shout", "fontWeight", "bold")
            .with_property("shout", "color", "blue");
        assert_eq!(
            map.css_for(&InlineStyle::from("shout")).as_deref(),
            Some("color: blue; font-weight: bold")
        );
    }

    #[test]
    fn header_levels() {
        assert_eq!(BlockType::HeaderOne.header_level(), Some(1));
        assert_eq!(BlockType::HeaderSix.header_level(), Some(6));
        assert_eq!(BlockType::Unstyled.header_level(), None);
    }
}
