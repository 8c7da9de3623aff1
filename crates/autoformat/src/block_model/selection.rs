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

//! Selection management.

use super::BlockModel;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("no block with key {0:?}")]
    UnknownBlock(String),
}

/// A cursor or range inside one block, in character offsets.
///
/// `anchor` is where the selection started and `focus` where it ends, so
/// `focus` may be smaller than `anchor` for a backwards selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub block_key: String,
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    pub fn collapsed(block_key: &str, offset: usize) -> Self {
        Self {
            block_key: block_key.to_owned(),
            anchor: offset,
            focus: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.focus)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

impl BlockModel {
    /// Select `[anchor, focus)` inside the block `block_key`. Offsets past
    /// the end of the block are clamped. Any queued style override is
    /// dropped.
    pub fn select(
        &mut self,
        block_key: &str,
        anchor: usize,
        focus: usize,
    ) -> Result<(), ModelError> {
        let index = self.index_of(block_key).ok_or_else(|| {
            log::warn!("select: unknown block key {block_key:?}");
            ModelError::UnknownBlock(block_key.to_owned())
        })?;
        let len = self.blocks[index].len();
        self.selection = Selection {
            block_key: block_key.to_owned(),
            anchor: anchor.min(len),
            focus: focus.min(len),
        };
        self.style_override = None;
        Ok(())
    }

    /// Put the cursor at the end of the last block.
    pub fn select_end(&mut self) {
        if let Some(last) = self.blocks.last() {
            self.selection = Selection::collapsed(&last.key, last.len());
            self.style_override = None;
        }
    }

    /// Move the cursor within the current block, keeping the override.
    pub(crate) fn collapse_to(&mut self, offset: usize) {
        self.selection.anchor = offset;
        self.selection.focus = offset;
    }

    /// Move the cursor to `offset` of block number `index`, keeping the
    /// override.
    pub(crate) fn collapse_to_block(&mut self, index: usize, offset: usize) {
        self.selection = Selection::collapsed(&self.blocks[index].key, offset);
    }
}
