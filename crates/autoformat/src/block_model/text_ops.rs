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

//! Text editing operations: insert, backspace, delete, split block.
//!
//! Backspace and delete remove whole grapheme clusters, so a combining
//! accent is never left dangling.

use serde_json::Map;
use unicode_segmentation::UnicodeSegmentation;

use super::{Block, BlockModel};
use crate::{EditorChangeType, StyleSet};

impl BlockModel {
    /// Replace the selection with `text` in the current inline style.
    /// Newlines in `text` split the block.
    pub fn insert_text(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.insert_characters(first);
        }
        for line in lines {
            self.split_block();
            self.insert_characters(line);
        }
    }

    fn insert_characters(&mut self, text: &str) {
        if text.is_empty() && self.selection.is_collapsed() {
            return;
        }
        let style = self.current_inline_style();
        let start = self.selection.start();
        let end = self.selection.end();
        self.current_block_mut().splice(start, end, text, &style);
        self.collapse_to(start + text.chars().count());
        self.push_change(EditorChangeType::InsertCharacters);
    }

    /// Replace `[start, end)` of the current block with unstyled `text`.
    pub fn replace_text_in_current_block(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
        change_type: EditorChangeType,
    ) {
        let end = end.min(self.current_block().len());
        let start = start.min(end);
        self.current_block_mut()
            .splice(start, end, text, &StyleSet::new());
        self.collapse_to(start + text.chars().count());
        self.push_change(change_type);
    }

    fn remove_range(
        &mut self,
        start: usize,
        end: usize,
        change_type: EditorChangeType,
    ) {
        self.current_block_mut()
            .splice(start, end, "", &StyleSet::new());
        self.collapse_to(start);
        self.push_change(change_type);
    }

    /// Delete backward from the cursor (backspace key). At the start of a
    /// block the block is joined onto the one above.
    pub fn backspace(&mut self) {
        let sel = self.selection.clone();
        if !sel.is_collapsed() {
            self.remove_range(
                sel.start(),
                sel.end(),
                EditorChangeType::RemoveRange,
            );
            return;
        }

        let offset = sel.start();
        if offset == 0 {
            self.join_with_previous_block();
            return;
        }
        let block = self.current_block();
        let before = &block.text[..block.byte_offset(offset)];
        let removed = before
            .graphemes(true)
            .next_back()
            .map_or(1, |g| g.chars().count());
        self.remove_range(
            offset - removed,
            offset,
            EditorChangeType::BackspaceCharacter,
        );
    }

    /// Delete the word (and any whitespace) before the cursor.
    pub fn backspace_word(&mut self) {
        let offset = self.selection.start();
        if !self.selection.is_collapsed() || offset == 0 {
            self.backspace();
            return;
        }
        let block = self.current_block();
        let before = &block.text[..block.byte_offset(offset)];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .split_word_bound_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        let start = before[..word_start].chars().count();
        self.remove_range(start, offset, EditorChangeType::BackspaceCharacter);
    }

    /// Delete from the start of the block up to the cursor.
    pub fn backspace_to_start_of_block(&mut self) {
        let offset = self.selection.start();
        if !self.selection.is_collapsed() || offset == 0 {
            self.backspace();
            return;
        }
        self.remove_range(0, offset, EditorChangeType::RemoveRange);
    }

    /// Delete forward from the cursor (delete key). At the end of a block
    /// the next block is joined onto this one.
    pub fn delete(&mut self) {
        let sel = self.selection.clone();
        if !sel.is_collapsed() {
            self.remove_range(
                sel.start(),
                sel.end(),
                EditorChangeType::RemoveRange,
            );
            return;
        }

        let offset = sel.start();
        let block = self.current_block();
        if offset >= block.len() {
            self.join_with_next_block();
            return;
        }
        let after = &block.text[block.byte_offset(offset)..];
        let removed = after
            .graphemes(true)
            .next()
            .map_or(1, |g| g.chars().count());
        self.remove_range(
            offset,
            offset + removed,
            EditorChangeType::DeleteCharacter,
        );
    }

    /// Delete any whitespace and the word after the cursor.
    pub fn delete_word(&mut self) {
        let offset = self.selection.start();
        let block = self.current_block();
        if !self.selection.is_collapsed() || offset >= block.len() {
            self.delete();
            return;
        }
        let byte = block.byte_offset(offset);
        let after = &block.text[byte..];
        let leading_ws = after.len() - after.trim_start().len();
        let word_len = after[leading_ws..]
            .split_word_bound_indices()
            .next()
            .map_or(0, |(_, word)| word.len());
        let end = block.text[..byte + leading_ws + word_len].chars().count();
        self.remove_range(offset, end, EditorChangeType::DeleteCharacter);
    }

    /// Delete from the cursor to the end of the block.
    pub fn delete_to_end_of_block(&mut self) {
        let offset = self.selection.start();
        let len = self.current_block().len();
        if !self.selection.is_collapsed() || offset >= len {
            self.delete();
            return;
        }
        self.remove_range(offset, len, EditorChangeType::RemoveRange);
    }

    /// Split the current block at the cursor (enter key). The new block
    /// keeps the type and depth of the one it was split from.
    pub fn split_block(&mut self) {
        let sel = self.selection.clone();
        if !sel.is_collapsed() {
            self.current_block_mut()
                .splice(sel.start(), sel.end(), "", &StyleSet::new());
        }

        let index = self.current_index();
        let key = self.new_block_key();
        let block = &mut self.blocks[index];
        let (text, styles) = block.split_off(sel.start());
        let new_block = Block {
            key,
            block_type: block.block_type,
            depth: block.depth,
            text,
            styles,
            data: Map::new(),
        };
        self.blocks.insert(index + 1, new_block);
        self.collapse_to_block(index + 1, 0);
        self.push_change(EditorChangeType::SplitBlock);
    }

    fn join_with_previous_block(&mut self) {
        let index = self.current_index();
        if index == 0 {
            return;
        }
        let block = self.blocks.remove(index);
        let previous = &mut self.blocks[index - 1];
        let joined_at = previous.len();
        previous.append(&block.text, block.styles);
        self.collapse_to_block(index - 1, joined_at);
        self.push_change(EditorChangeType::BackspaceCharacter);
    }

    fn join_with_next_block(&mut self) {
        let index = self.current_index();
        if index + 1 >= self.blocks.len() {
            return;
        }
        let next = self.blocks.remove(index + 1);
        self.blocks[index].append(&next.text, next.styles);
        self.push_change(EditorChangeType::DeleteCharacter);
    }
}
