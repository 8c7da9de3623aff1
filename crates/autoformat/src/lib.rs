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

//! Markdown-style auto-formatting for a block based rich text editor.
//!
//! Typing `#`, `*`, `**` or `***` as the whole content of a block and then
//! a space turns the block into a header or switches on an inline style.
//! Key commands such as `bold` are routed to the document's built-in
//! handlers, and the whole document can be saved to (and restored from) a
//! key-value store such as the browser's `localStorage`.
//!
//! The formatting logic only talks to the document through
//! [`RichTextDocument`], so any engine implementing that trait can be
//! plugged in. [`BlockModel`] is the engine shipped with this crate.

mod block_model;
mod change_type;
mod config;
mod document_interface;
mod editor;
mod key_command;
mod persistence;
mod snapshot;
mod styles;
mod triggers;

pub use crate::block_model::{Block, BlockModel, ModelError, Selection};
pub use crate::change_type::EditorChangeType;
pub use crate::config::{ConfigError, EditorConfig, DEFAULT_STORAGE_KEY};
pub use crate::document_interface::{NativeEditing, RichTextDocument};
pub use crate::editor::{Editor, Notice, NoticeLevel};
pub use crate::key_command::{default_key_binding, KeyCommand, KeyEvent};
#[cfg(feature = "js")]
pub use crate::persistence::LocalStorage;
pub use crate::persistence::{
    KeyValueStore, LoadOutcome, MemoryStore, PersistenceBridge,
    PersistenceError, StoreError,
};
pub use crate::snapshot::{
    RawBlock, RawContent, RawEntityRange, RawInlineStyleRange, SnapshotError,
};
pub use crate::styles::{BlockType, InlineStyle, StyleMap, StyleSet};
pub use crate::triggers::{
    FormatTarget, HandleResult, TriggerDetector, TriggerRule, DEFAULT_TRIGGERS,
};
