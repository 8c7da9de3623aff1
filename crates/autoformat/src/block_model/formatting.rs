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

//! Inline formatting operations.

use super::BlockModel;
use crate::{EditorChangeType, InlineStyle};

impl BlockModel {
    /// Toggle `style` on the selection.
    ///
    /// With a collapsed cursor nothing in the text changes: the style is
    /// queued (or unqueued) for the next inserted characters. With a range,
    /// the style is removed from the whole range if the first selected
    /// character has it, and added to the whole range otherwise.
    pub fn toggle_inline_style(&mut self, style: &InlineStyle) {
        if self.selection.is_collapsed() {
            let mut pending = self.current_inline_style();
            if !pending.remove(style) {
                pending.insert(style.clone());
            }
            self.style_override = Some(pending);
            return;
        }

        let start = self.selection.start();
        let end = self.selection.end();
        let remove = self.current_block().styles[start..end]
            .first()
            .is_some_and(|s| s.contains(style));

        for styles in &mut self.current_block_mut().styles[start..end] {
            if remove {
                styles.remove(style);
            } else {
                styles.insert(style.clone());
            }
        }
        self.push_change(EditorChangeType::ChangeInlineStyle);
    }
}
