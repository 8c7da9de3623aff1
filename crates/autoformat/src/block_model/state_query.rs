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

//! Queries about the state at the cursor.

use super::BlockModel;
use crate::{BlockType, InlineStyle, StyleSet};

impl BlockModel {
    /// Full text of the block containing the cursor.
    pub fn current_block_text(&self) -> &str {
        self.current_block().text()
    }

    pub fn current_block_type(&self) -> BlockType {
        self.current_block().block_type()
    }

    /// The inline style that newly typed text would get.
    ///
    /// For a collapsed cursor this is the queued override if there is one,
    /// otherwise the style of the character before the cursor. At the start
    /// of a block the first character is used, and in an empty block the
    /// last character of the closest non-empty block above. For a range
    /// it is the style of the first selected character.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(style_override) = &self.style_override {
            return style_override.clone();
        }

        let index = self.current_index();
        let block = &self.blocks[index];
        let start = self.selection.start();

        let style = if !self.selection.is_collapsed() {
            block.style_at(start)
        } else if start > 0 {
            block.style_at(start - 1)
        } else if !block.is_empty() {
            block.style_at(0)
        } else {
            self.blocks[..index]
                .iter()
                .rev()
                .find(|b| !b.is_empty())
                .and_then(|b| b.styles.last())
        };
        style.cloned().unwrap_or_default()
    }

    pub fn has_inline_style(&self, style: &InlineStyle) -> bool {
        self.current_inline_style().contains(style)
    }
}
