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

//! Implements [`RichTextDocument`] and [`NativeEditing`] for
//! [`BlockModel`] by forwarding to the model's own methods.

use super::BlockModel;
use crate::{
    BlockType, EditorChangeType, InlineStyle, KeyCommand, NativeEditing,
    RawContent, RichTextDocument, SnapshotError,
};

impl RichTextDocument for BlockModel {
    fn current_block_text(&self) -> &str {
        self.current_block_text()
    }

    fn replace_text_in_current_block(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
        change_type: EditorChangeType,
    ) {
        self.replace_text_in_current_block(start, end, text, change_type)
    }

    fn toggle_block_type(&mut self, block_type: BlockType) {
        self.toggle_block_type(block_type)
    }

    fn toggle_inline_style(&mut self, style: &InlineStyle) {
        self.toggle_inline_style(style)
    }

    fn to_snapshot(&self) -> RawContent {
        self.to_raw()
    }

    fn from_snapshot(raw: RawContent) -> Result<Self, SnapshotError> {
        Self::from_raw(raw)
    }

    fn handle_key_command(&mut self, command: KeyCommand) -> bool {
        self.handle_key_command(command)
    }
}

impl NativeEditing for BlockModel {
    fn insert_text(&mut self, text: &str) {
        self.insert_text(text)
    }

    fn backspace(&mut self) {
        self.backspace()
    }

    fn backspace_word(&mut self) {
        self.backspace_word()
    }

    fn backspace_to_start_of_block(&mut self) {
        self.backspace_to_start_of_block()
    }

    fn delete(&mut self) {
        self.delete()
    }

    fn delete_word(&mut self) {
        self.delete_word()
    }

    fn delete_to_end_of_block(&mut self) {
        self.delete_to_end_of_block()
    }

    fn split_block(&mut self) {
        self.split_block()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        BlockModel, BlockType, EditorChangeType, NativeEditing,
        RichTextDocument,
    };

    fn through_trait<D: RichTextDocument + NativeEditing>(doc: &mut D) {
        doc.insert_text("#");
        let len = doc.current_block_text().chars().count();
        doc.replace_text_in_current_block(
            0,
            len,
            "",
            EditorChangeType::ChangeBlockType,
        );
        doc.toggle_block_type(BlockType::HeaderOne);
        doc.insert_text("Title");
    }

    #[test]
    fn trait_methods_reach_the_model() {
        let mut model = BlockModel::new();
        through_trait(&mut model);
        assert_eq!(model.current_block_text(), "Title");
        assert_eq!(model.current_block_type(), BlockType::HeaderOne);
    }

    #[test]
    fn snapshot_through_trait() {
        let mut model = BlockModel::new();
        through_trait(&mut model);
        let raw = RichTextDocument::to_snapshot(&model);
        let restored =
            <BlockModel as RichTextDocument>::from_snapshot(raw).unwrap();
        assert_eq!(restored.blocks(), model.blocks());
    }
}
