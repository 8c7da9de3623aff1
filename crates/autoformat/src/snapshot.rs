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

//! The raw, serialisable form of a document.
//!
//! ```json
//! {
//!   "blocks": [{
//!     "key": "a0001",
//!     "text": "Hello",
//!     "type": "header-one",
//!     "depth": 0,
//!     "inlineStyleRanges": [{ "offset": 0, "length": 5, "style": "red" }],
//!     "entityRanges": [],
//!     "data": {}
//!   }],
//!   "entityMap": {}
//! }
//! ```
//!
//! `offset` and `length` count Unicode code points, not bytes or UTF-16
//! code units.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{BlockType, InlineStyle};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block key {0:?} appears more than once")]
    DuplicateBlockKey(String),
    #[error(
        "style range {offset}+{length} is outside block {key:?} \
         of length {block_len}"
    )]
    RangeOutOfBounds {
        key: String,
        offset: usize,
        length: usize,
        block_len: usize,
    },
}

/// A whole document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: Map<String, Value>,
}

/// One block with its style ranges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawInlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

/// Accepted for compatibility with stored content. Entities are not
/// modelled, so these are dropped on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: usize,
}

impl RawContent {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the structural invariants a document relies on. Blocks with
    /// an empty key are given a fresh key on load, so only non-empty keys
    /// must be unique.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen = std::collections::HashSet::new();
        for block in &self.blocks {
            if !block.key.is_empty() && !seen.insert(block.key.as_str()) {
                return Err(SnapshotError::DuplicateBlockKey(
                    block.key.clone(),
                ));
            }
            let block_len = block.text.chars().count();
            for range in &block.inline_style_ranges {
                let fits = range
                    .offset
                    .checked_add(range.length)
                    .is_some_and(|end| end <= block_len);
                if !fits {
                    return Err(SnapshotError::RangeOutOfBounds {
                        key: block.key.clone(),
                        offset: range.offset,
                        length: range.length,
                        block_len,
                    });
                }
            }
        }
        Ok(())
    }
}
