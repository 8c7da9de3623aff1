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

//! Rendering blocks and style runs as HTML.
//!
//! Each block becomes one element:
//! - `unstyled`, `paragraph`     → `<p>…</p>`
//! - `header-one` … `header-six` → `<h1>…</h1>` … `<h6>…</h6>`
//! - `blockquote`                → `<blockquote>…</blockquote>`
//! - `code-block`                → `<pre><code>…</code></pre>`
//! - `atomic`                    → `<figure>…</figure>`
//! - list items                  → `<li>…</li>`
//!
//! Consecutive list items of the same type are merged into one `<ol>` or
//! `<ul>` wrapper. Built-in inline styles map to tags, custom styles to a
//! `<span>` carrying the CSS from the [`StyleMap`]. Custom styles missing
//! from the map are rendered as plain text.

use super::runs::StyleRun;
use super::{Block, BlockModel};
use crate::{BlockType, StyleMap};

/// The list wrapper currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListWrapper {
    None,
    Ordered,
    Unordered,
}

impl ListWrapper {
    fn for_type(block_type: BlockType) -> Self {
        match block_type {
            BlockType::OrderedListItem => Self::Ordered,
            BlockType::UnorderedListItem => Self::Unordered,
            _ => Self::None,
        }
    }

    fn open(&self, html: &mut String) {
        match self {
            Self::Ordered => html.push_str("<ol>"),
            Self::Unordered => html.push_str("<ul>"),
            Self::None => {}
        }
    }

    fn close(&self, html: &mut String) {
        match self {
            Self::Ordered => html.push_str("</ol>"),
            Self::Unordered => html.push_str("</ul>"),
            Self::None => {}
        }
    }
}

/// Opening and closing markup around a block's content.
fn block_tags(block_type: BlockType) -> (String, String) {
    if let Some(level) = block_type.header_level() {
        return (format!("<h{level}>"), format!("</h{level}>"));
    }
    let (open, close) = match block_type {
        BlockType::Blockquote => ("<blockquote>", "</blockquote>"),
        BlockType::CodeBlock => ("<pre><code>", "</code></pre>"),
        BlockType::Atomic => ("<figure>", "</figure>"),
        BlockType::UnorderedListItem | BlockType::OrderedListItem => {
            ("<li>", "</li>")
        }
        _ => ("<p>", "</p>"),
    };
    (open.to_owned(), close.to_owned())
}

impl BlockModel {
    /// Render the whole document as HTML, using `style_map` for custom
    /// inline styles.
    pub fn to_html(&self, style_map: &StyleMap) -> String {
        let mut html = String::new();
        let mut wrapper = ListWrapper::None;

        for block in &self.blocks {
            let block_wrapper = ListWrapper::for_type(block.block_type);
            if block_wrapper != wrapper {
                wrapper.close(&mut html);
                block_wrapper.open(&mut html);
                wrapper = block_wrapper;
            }
            emit_block(&mut html, block, style_map);
        }
        wrapper.close(&mut html);

        html
    }
}

fn emit_block(html: &mut String, block: &Block, style_map: &StyleMap) {
    let (open, close) = block_tags(block.block_type);
    html.push_str(&open);
    for run in block.style_runs() {
        emit_run(html, &run, style_map);
    }
    html.push_str(&close);
}

fn emit_run(html: &mut String, run: &StyleRun<'_>, style_map: &StyleMap) {
    let mut close_tags: Vec<&str> = Vec::new();

    for style in run.styles {
        if let Some(tag) = style.html_tag() {
            html.push_str(&format!("<{tag}>"));
            close_tags.push(tag);
        } else if let Some(css) = style_map.css_for(style) {
            html.push_str(&format!(
                "<span style=\"{}\">",
                html_escape::encode_double_quoted_attribute(&css)
            ));
            close_tags.push("span");
        }
    }

    html.push_str(&html_escape::encode_text(run.text));

    while let Some(tag) = close_tags.pop() {
        html.push_str(&format!("</{tag}>"));
    }
}
