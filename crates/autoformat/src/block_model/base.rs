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

use serde_json::{Map, Value};

use super::selection::Selection;
use crate::{BlockType, EditorChangeType, StyleSet};

/// A paragraph-level unit of the document.
///
/// `styles` holds one entry per character of `text`, so
/// `styles.len() == text.chars().count()` at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub(crate) key: String,
    pub(crate) block_type: BlockType,
    pub(crate) depth: usize,
    pub(crate) text: String,
    pub(crate) styles: Vec<StyleSet>,
    /// Opaque per-block data, kept only so it survives a save/load.
    pub(crate) data: Map<String, Value>,
}

impl Block {
    pub(crate) fn empty(key: String, block_type: BlockType) -> Self {
        Self {
            key,
            block_type,
            depth: 0,
            text: String::new(),
            styles: Vec::new(),
            data: Map::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles of the character at `offset`.
    pub fn style_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    /// Byte index of character `offset`, clamped to the end of the text.
    pub(crate) fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace characters `[start, end)` with `text`, every new character
    /// carrying `style`.
    pub(crate) fn splice(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
        style: &StyleSet,
    ) {
        let end = end.min(self.len());
        let start = start.min(end);
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.replace_range(byte_start..byte_end, text);
        let inserted = text.chars().map(|_| style.clone());
        self.styles.splice(start..end, inserted);
    }

    /// Cut the block at `offset`, returning the text and styles after it.
    pub(crate) fn split_off(
        &mut self,
        offset: usize,
    ) -> (String, Vec<StyleSet>) {
        let offset = offset.min(self.len());
        let byte = self.byte_offset(offset);
        (self.text.split_off(byte), self.styles.split_off(offset))
    }

    pub(crate) fn append(&mut self, text: &str, styles: Vec<StyleSet>) {
        self.text.push_str(text);
        self.styles.extend(styles);
    }
}

/// Hands out block keys that are unique within one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BlockKeyGenerator {
    next: u64,
}

impl BlockKeyGenerator {
    pub(crate) fn next_key(&mut self, blocks: &[Block]) -> String {
        loop {
            let key = base36_key(self.next);
            self.next += 1;
            if !blocks.iter().any(|b| b.key == key) {
                return key;
            }
        }
    }
}

/// Five character (or longer) lower-case base 36 key.
fn base36_key(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    while out.len() < 5 {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// A rich text document made of blocks.
///
/// The selection always lives inside a single block, and there is always
/// at least one block.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockModel {
    pub(crate) blocks: Vec<Block>,

    pub(crate) selection: Selection,

    /// Styles queued at a collapsed cursor for the next inserted text.
    pub(crate) style_override: Option<StyleSet>,

    /// The kind of the most recent edit.
    pub(crate) last_change_type: Option<EditorChangeType>,

    pub(crate) keys: BlockKeyGenerator,
}

impl BlockModel {
    /// Create a document holding one empty unstyled block.
    pub fn new() -> Self {
        let mut keys = BlockKeyGenerator::default();
        let key = keys.next_key(&[]);
        let block = Block::empty(key, BlockType::Unstyled);
        let mut model = Self::from_blocks(vec![block]);
        model.keys = keys;
        model
    }

    /// Wrap `blocks` with the cursor at the start of the first block.
    /// An empty list is replaced by one empty block.
    pub(crate) fn from_blocks(mut blocks: Vec<Block>) -> Self {
        let mut keys = BlockKeyGenerator::default();
        if blocks.is_empty() {
            let key = keys.next_key(&[]);
            blocks.push(Block::empty(key, BlockType::Unstyled));
        }
        let selection = Selection::collapsed(&blocks[0].key, 0);
        Self {
            blocks,
            selection,
            style_override: None,
            last_change_type: None,
            keys,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn last_change_type(&self) -> Option<EditorChangeType> {
        self.last_change_type
    }

    /// Inline styles queued for the next inserted text, if any.
    pub fn style_override(&self) -> Option<&StyleSet> {
        self.style_override.as_ref()
    }

    pub(crate) fn index_of(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.key == key)
    }

    pub(crate) fn current_index(&self) -> usize {
        self.index_of(&self.selection.block_key).unwrap_or(0)
    }

    /// The block containing the cursor.
    pub fn current_block(&self) -> &Block {
        &self.blocks[self.current_index()]
    }

    pub(crate) fn current_block_mut(&mut self) -> &mut Block {
        let index = self.current_index();
        &mut self.blocks[index]
    }

    pub(crate) fn new_block_key(&mut self) -> String {
        self.keys.next_key(&self.blocks)
    }

    /// Record an edit of kind `change_type`, dropping the style override
    /// unless that kind of edit keeps it.
    pub(crate) fn push_change(&mut self, change_type: EditorChangeType) {
        if !change_type.preserves_style_override() {
            self.style_override = None;
        }
        self.last_change_type = Some(change_type);
    }

    /// Return a debug tree representation of the document.
    pub fn to_tree(&self) -> String {
        let sel = &self.selection;
        let mut out = format!(
            "sel: {}({},{})\n",
            sel.block_key, sel.anchor, sel.focus
        );

        for block in &self.blocks {
            out.push_str(&format!(
                "├─ block {} ({}, depth {})\n",
                block.key, block.block_type, block.depth
            ));

            let selected = block.key == sel.block_key;
            if block.is_empty() {
                if selected {
                    out.push_str("│  |\n");
                }
                continue;
            }

            for run in block.style_runs() {
                let style_names: Vec<&str> =
                    run.styles.iter().map(|s| s.name()).collect();
                let styles_str = if style_names.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", style_names.join(", "))
                };
                let display_text = if selected {
                    annotate_selection(
                        run.text,
                        run.start,
                        run.end == block.len(),
                        sel.start(),
                        sel.end(),
                    )
                } else {
                    run.text.to_owned()
                };
                out.push_str(&format!("│  \"{display_text}\"{styles_str}\n"));
            }
        }

        out
    }
}

/// Insert `|` (cursor) or `{…}` (range selection) markers into a run.
///
/// `run_start` is the character offset of the run within its block and
/// `last_run` says whether a cursor at the run's end should be drawn here.
fn annotate_selection(
    text: &str,
    run_start: usize,
    last_run: bool,
    sel_start: usize,
    sel_end: usize,
) -> String {
    let mut result = String::new();
    let mut pos = run_start;
    for ch in text.chars() {
        if pos == sel_start {
            result.push(if sel_start == sel_end { '|' } else { '{' });
        }
        result.push(ch);
        pos += 1;
        if pos == sel_end && sel_start != sel_end {
            result.push('}');
        }
    }
    if last_run && sel_start == pos && sel_start == sel_end {
        result.push('|');
    }
    result
}

impl Default for BlockModel {
    fn default() -> Self {
        Self::new()
    }
}
