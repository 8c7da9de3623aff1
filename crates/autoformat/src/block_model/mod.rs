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

//! Block based rich text document model.
//!
//! This module provides [`BlockModel`], the engine behind
//! [`RichTextDocument`](crate::RichTextDocument) and
//! [`NativeEditing`](crate::NativeEditing) shipped with the crate. A
//! document is a non-empty list of [`Block`]s; each block keeps its text
//! together with one style set per character.

mod base;
mod block_ops;
mod content_access;
mod formatting;
mod key_commands;
mod runs;
mod selection;
mod snapshot_conversion;
mod spans_html;
mod state_query;
mod text_ops;
mod trait_impl;

pub use base::{Block, BlockModel};
pub use selection::{ModelError, Selection};
