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

//! Content access: HTML and plain text.

use super::BlockModel;
use crate::StyleMap;

impl BlockModel {
    /// HTML of the document using the default custom style map.
    pub fn get_content_as_html(&self) -> String {
        self.to_html(&StyleMap::default())
    }

    /// Block texts joined with newlines.
    pub fn get_content_as_plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the document holds anything beyond a single empty block.
    /// Hosts show the placeholder only when this is `false`.
    pub fn has_text(&self) -> bool {
        self.blocks.len() > 1 || !self.blocks[0].is_empty()
    }
}
