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

//! Markdown-style trigger detection.
//!
//! Before characters are inserted, the detector compares the *whole* text
//! of the block holding the cursor with each trigger. When the incoming
//! input is a single space and the block text equals a trigger exactly,
//! the trigger text is removed and a style is applied instead of inserting
//! the space:
//!
//! | Trigger | Target | Style          |
//! |---------|--------|----------------|
//! | `#`     | block  | `header-one`   |
//! | `*`     | inline | `BOLD`         |
//! | `**`    | inline | `red`          |
//! | `***`   | inline | `UNDERLINE`    |
//!
//! Matching is by equality, never by prefix, so `*`, `**` and `***` cannot
//! shadow each other whatever order the rules are listed in.
//!
//! Note that the comparison uses the full block text, not the text before
//! the cursor: a space typed anywhere inside a block whose text is `#`
//! still fires the rule.

use std::str::FromStr;

use once_cell::sync::Lazy;
use strum_macros::{AsRefStr, Display};

use crate::{
    BlockType, EditorChangeType, InlineStyle, KeyCommand, RichTextDocument,
};

/// The input that completes a trigger.
const TRIGGER_INPUT: &str = " ";

/// The built-in trigger table.
pub static DEFAULT_TRIGGERS: Lazy<Vec<TriggerRule>> = Lazy::new(|| {
    vec![
        TriggerRule::block("#", BlockType::HeaderOne),
        TriggerRule::inline("*", InlineStyle::Bold),
        TriggerRule::inline("**", InlineStyle::named("red")),
        TriggerRule::inline("***", InlineStyle::Underline),
    ]
});

/// What a trigger formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatTarget {
    Block(BlockType),
    Inline(InlineStyle),
}

impl FormatTarget {
    /// How the removal of the trigger text is recorded.
    fn change_type(&self) -> EditorChangeType {
        match self {
            Self::Block(_) => EditorChangeType::ChangeBlockType,
            Self::Inline(_) => EditorChangeType::RemoveRange,
        }
    }
}

/// A single row of the trigger table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerRule {
    pub trigger: String,
    pub target: FormatTarget,
}

impl TriggerRule {
    pub fn block(trigger: &str, block_type: BlockType) -> Self {
        Self {
            trigger: trigger.to_owned(),
            target: FormatTarget::Block(block_type),
        }
    }

    pub fn inline(trigger: &str, style: InlineStyle) -> Self {
        Self {
            trigger: trigger.to_owned(),
            target: FormatTarget::Inline(style),
        }
    }

    fn matches(&self, block_text: &str, chars: &str) -> bool {
        chars == TRIGGER_INPUT && block_text == self.trigger
    }
}

/// Outcome reported back to the host for an input or key command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum HandleResult {
    Handled,
    NotHandled,
}

impl HandleResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Intercepts trigger sequences and key commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerDetector {
    rules: Vec<TriggerRule>,
}

impl Default for TriggerDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGERS.clone())
    }
}

impl TriggerDetector {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    /// The rule fired by typing `chars` into a block whose full text is
    /// `block_text`, if any.
    pub fn find_rule(
        &self,
        block_text: &str,
        chars: &str,
    ) -> Option<&TriggerRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(block_text, chars))
    }

    /// Called before `chars` is inserted into `doc`.
    ///
    /// On a match the trigger text is removed and the rule's style applied,
    /// and [`HandleResult::Handled`] tells the host not to insert `chars`.
    /// Otherwise `doc` is left untouched.
    pub fn handle_before_input<D>(
        &self,
        doc: &mut D,
        chars: &str,
    ) -> HandleResult
    where
        D: RichTextDocument + ?Sized,
    {
        let Some(rule) = self.find_rule(doc.current_block_text(), chars)
        else {
            return HandleResult::NotHandled;
        };

        let block_len = doc.current_block_text().chars().count();
        doc.replace_text_in_current_block(
            0,
            block_len,
            "",
            rule.target.change_type(),
        );
        match &rule.target {
            FormatTarget::Block(block_type) => {
                doc.toggle_block_type(*block_type)
            }
            FormatTarget::Inline(style) => doc.toggle_inline_style(style),
        }

        log::debug!(
            "trigger {:?} applied {:?}",
            rule.trigger,
            rule.target
        );
        HandleResult::Handled
    }

    /// Route a named key command to the document's built-in handler.
    ///
    /// Unknown command names, and commands the document declines, are
    /// reported as [`HandleResult::NotHandled`] so the host can fall back
    /// to its default key handling.
    pub fn handle_key_command<D>(
        &self,
        doc: &mut D,
        command: &str,
    ) -> HandleResult
    where
        D: RichTextDocument + ?Sized,
    {
        let Ok(command) = KeyCommand::from_str(command) else {
            return HandleResult::NotHandled;
        };
        if doc.handle_key_command(command) {
            log::debug!("key command {command} handled");
            HandleResult::Handled
        } else {
            HandleResult::NotHandled
        }
    }
}
