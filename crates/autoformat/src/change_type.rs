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

use strum_macros::{AsRefStr, Display, EnumString};

/// Tag describing the kind of edit that produced a document state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EditorChangeType {
    AdjustDepth,
    BackspaceCharacter,
    ChangeBlockType,
    ChangeInlineStyle,
    DeleteCharacter,
    InsertCharacters,
    RemoveRange,
    SplitBlock,
}

impl EditorChangeType {
    /// Whether an inline style override queued at the cursor survives a
    /// change of this kind.
    pub fn preserves_style_override(&self) -> bool {
        matches!(
            self,
            Self::AdjustDepth | Self::ChangeBlockType | Self::SplitBlock
        )
    }
}
