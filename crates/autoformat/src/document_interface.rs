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

//! Defines [`RichTextDocument`] and [`NativeEditing`], the contract between
//! the formatting layer and whatever engine stores the document.
//!
//! [`TriggerDetector`](crate::TriggerDetector) and
//! [`PersistenceBridge`](crate::PersistenceBridge) only ever see a document
//! through [`RichTextDocument`]. [`Editor`](crate::Editor) additionally uses
//! [`NativeEditing`] for the default behaviour that runs when the detector
//! declines an input.
//!
//! All offsets are character (Unicode scalar value) offsets within the
//! block that contains the cursor.

use crate::{
    BlockType, EditorChangeType, InlineStyle, KeyCommand, RawContent,
    SnapshotError,
};

/// The operations the formatting layer needs from a rich text engine.
pub trait RichTextDocument {
    /// Full plain text of the block containing the cursor.
    fn current_block_text(&self) -> &str;

    /// Replace `[start, end)` of the current block with `text`, recording
    /// the edit as `change_type`. The inserted text carries no inline
    /// style and the cursor ends up after it.
    fn replace_text_in_current_block(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
        change_type: EditorChangeType,
    );

    /// Set the current block to `block_type`, or back to
    /// [`BlockType::Unstyled`] if it already has that type.
    fn toggle_block_type(&mut self, block_type: BlockType);

    /// Toggle `style` on the current selection. With a collapsed cursor the
    /// style applies to the next inserted characters.
    fn toggle_inline_style(&mut self, style: &InlineStyle);

    /// Serialise the whole document.
    fn to_snapshot(&self) -> RawContent;

    /// Rebuild a document from a snapshot.
    fn from_snapshot(raw: RawContent) -> Result<Self, SnapshotError>
    where
        Self: Sized;

    /// Run the engine's built-in handler for `command`. Returns `false`
    /// when the handler does not apply, leaving the document untouched.
    fn handle_key_command(&mut self, command: KeyCommand) -> bool;
}

/// Default editing behaviour, used when no formatting rule intercepts an
/// input.
pub trait NativeEditing {
    /// Replace the selection with `text` in the current inline style.
    fn insert_text(&mut self, text: &str);

    fn backspace(&mut self);

    fn backspace_word(&mut self);

    fn backspace_to_start_of_block(&mut self);

    fn delete(&mut self);

    fn delete_word(&mut self);

    fn delete_to_end_of_block(&mut self);

    /// Split the current block at the cursor (enter key).
    fn split_block(&mut self);
}
