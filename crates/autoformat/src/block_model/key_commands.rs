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

use super::BlockModel;
use crate::KeyCommand;

impl BlockModel {
    /// The rich handling of a key command. Returns `false` when the command
    /// has no rich meaning here, in which case the plain editing behaviour
    /// (deleting a character, splitting the block) should run instead.
    pub fn handle_key_command(&mut self, command: KeyCommand) -> bool {
        if let Some(style) = command.inline_style() {
            self.toggle_inline_style(&style);
            true
        } else if command.is_backspace() {
            self.remove_atomic_block_before()
                || self.try_to_remove_block_style()
        } else if command.is_delete() {
            self.remove_atomic_block_after()
        } else {
            false
        }
    }
}
