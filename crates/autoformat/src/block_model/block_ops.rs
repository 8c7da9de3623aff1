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

//! Block-level operations: block types and atomic block removal.

use super::BlockModel;
use crate::{BlockType, EditorChangeType};

impl BlockModel {
    /// Set the current block to `block_type`, or reset it to
    /// [`BlockType::Unstyled`] when it already has that type.
    pub fn toggle_block_type(&mut self, block_type: BlockType) {
        let target = if self.current_block_type() == block_type {
            BlockType::Unstyled
        } else {
            block_type
        };
        self.set_block_type(target);
    }

    pub fn set_block_type(&mut self, block_type: BlockType) {
        self.current_block_mut().block_type = block_type;
        self.push_change(EditorChangeType::ChangeBlockType);
    }

    /// Reset the block style when the cursor sits at the very start of a
    /// styled block that is empty or first in the document. Other blocks
    /// are left for backspace to join with the block above, and so is a
    /// code block directly below a non-empty code block.
    ///
    /// Returns whether anything changed.
    pub(crate) fn try_to_remove_block_style(&mut self) -> bool {
        if !self.cursor_at_block_start() {
            return false;
        }
        let index = self.current_index();
        if index != 0 && !self.blocks[index].is_empty() {
            return false;
        }
        let block_type = self.blocks[index].block_type;
        if block_type == BlockType::CodeBlock
            && index > 0
            && self.blocks[index - 1].block_type == BlockType::CodeBlock
            && !self.blocks[index - 1].is_empty()
        {
            return false;
        }
        if block_type == BlockType::Unstyled {
            return false;
        }
        self.set_block_type(BlockType::Unstyled);
        true
    }

    /// Remove an atomic block directly above the cursor when the cursor is
    /// at the start of its block.
    pub(crate) fn remove_atomic_block_before(&mut self) -> bool {
        if !self.cursor_at_block_start() {
            return false;
        }
        let index = self.current_index();
        if index == 0 || self.blocks[index - 1].block_type != BlockType::Atomic
        {
            return false;
        }
        self.blocks.remove(index - 1);
        self.push_change(EditorChangeType::RemoveRange);
        true
    }

    /// Remove an atomic block directly below the cursor when the cursor is
    /// at the end of its block.
    pub(crate) fn remove_atomic_block_after(&mut self) -> bool {
        let index = self.current_index();
        let at_end = self.selection.is_collapsed()
            && self.selection.start() == self.blocks[index].len();
        let next_is_atomic = self
            .blocks
            .get(index + 1)
            .is_some_and(|b| b.block_type == BlockType::Atomic);
        if !at_end || !next_is_atomic {
            return false;
        }
        self.blocks.remove(index + 1);
        self.push_change(EditorChangeType::RemoveRange);
        true
    }

    fn cursor_at_block_start(&self) -> bool {
        self.selection.is_collapsed() && self.selection.start() == 0
    }
}
