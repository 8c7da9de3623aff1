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

//! Named editor commands and the default keyboard bindings for them.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::InlineStyle;

/// A named command produced by a key binding, e.g. `"bold"`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum KeyCommand {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
    Delete,
    DeleteWord,
    DeleteToEndOfBlock,
    SplitBlock,
}

impl KeyCommand {
    /// The built-in inline style toggled by this command, if any.
    pub fn inline_style(&self) -> Option<InlineStyle> {
        match self {
            Self::Bold => Some(InlineStyle::Bold),
            Self::Italic => Some(InlineStyle::Italic),
            Self::Underline => Some(InlineStyle::Underline),
            Self::Code => Some(InlineStyle::Code),
            Self::Strikethrough => Some(InlineStyle::Strikethrough),
            _ => None,
        }
    }

    pub fn is_backspace(&self) -> bool {
        matches!(
            self,
            Self::Backspace | Self::BackspaceWord | Self::BackspaceToStartOfLine
        )
    }

    pub fn is_delete(&self) -> bool {
        matches!(
            self,
            Self::Delete | Self::DeleteWord | Self::DeleteToEndOfBlock
        )
    }
}

/// A key press as reported by the platform.
///
/// `key` follows the DOM `KeyboardEvent.key` naming (`"b"`, `"Backspace"`,
/// `"Enter"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Map a key press to the command it triggers by default.
pub fn default_key_binding(event: &KeyEvent) -> Option<KeyCommand> {
    match event.key.as_str() {
        "Backspace" if event.alt => Some(KeyCommand::BackspaceWord),
        "Backspace" if event.has_command_modifier() => {
            Some(KeyCommand::BackspaceToStartOfLine)
        }
        "Backspace" => Some(KeyCommand::Backspace),
        "Delete" if event.alt => Some(KeyCommand::DeleteWord),
        "Delete" if event.has_command_modifier() => {
            Some(KeyCommand::DeleteToEndOfBlock)
        }
        "Delete" => Some(KeyCommand::Delete),
        "Enter" => Some(KeyCommand::SplitBlock),
        key if event.has_command_modifier() && !event.alt => {
            match (key.to_ascii_lowercase().as_str(), event.shift) {
                ("b", false) => Some(KeyCommand::Bold),
                ("i", false) => Some(KeyCommand::Italic),
                ("u", false) => Some(KeyCommand::Underline),
                ("j", false) => Some(KeyCommand::Code),
                ("x", true) => Some(KeyCommand::Strikethrough),
                _ => None,
            }
        }
        _ => None,
    }
}
