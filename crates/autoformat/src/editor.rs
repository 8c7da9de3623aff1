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

//! The editor widget: one document wired to a trigger detector and a
//! persistence bridge.
//!
//! Hosts forward every input and key command here. When the detector
//! declines, the editor runs the plain editing behaviour itself, so the
//! document always reflects what the user typed.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display};

use crate::{
    default_key_binding, BlockModel, EditorConfig, HandleResult, KeyCommand,
    KeyEvent, KeyValueStore, LoadOutcome, NativeEditing, PersistenceBridge,
    PersistenceError, RichTextDocument, TriggerDetector,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user, such as the acknowledgement after a save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

pub struct Editor<D, S> {
    document: D,
    detector: TriggerDetector,
    persistence: PersistenceBridge<S>,
    config: EditorConfig,
    notices: Vec<Notice>,
}

impl<D, S> Editor<D, S>
where
    D: RichTextDocument + NativeEditing + Default,
    S: KeyValueStore,
{
    /// Create the editor, restoring any document saved in `store`.
    ///
    /// Unusable stored content never prevents mounting: the editor starts
    /// empty and queues a warning notice instead.
    pub fn mount(store: S, config: EditorConfig) -> Self {
        let persistence =
            PersistenceBridge::new(store, config.storage_key.clone());
        let mut notices = Vec::new();
        let document = match persistence.restore::<D>() {
            LoadOutcome::Recovered { document, .. } => {
                notices.push(Notice::new(
                    NoticeLevel::Warning,
                    config.restore_failed_notice.clone(),
                ));
                document
            }
            outcome => outcome.into_document(),
        };

        Self {
            document,
            detector: TriggerDetector::default(),
            persistence,
            config,
            notices,
        }
    }

    /// Replace the trigger table.
    pub fn with_detector(mut self, detector: TriggerDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Characters are about to be typed. Triggers are applied if they
    /// match, otherwise the characters are inserted.
    pub fn handle_before_input(&mut self, chars: &str) -> HandleResult {
        let result = self
            .detector
            .handle_before_input(&mut self.document, chars);
        if !result.is_handled() {
            self.document.insert_text(chars);
        }
        result
    }

    /// A named key command was issued. The document's rich handling runs
    /// first, then the plain editing behaviour for deletes and splits.
    ///
    /// Returns the rich handling's decision, so unknown commands and
    /// commands handled by plain editing report
    /// [`HandleResult::NotHandled`].
    pub fn handle_key_command(&mut self, command: &str) -> HandleResult {
        let result = self
            .detector
            .handle_key_command(&mut self.document, command);
        if !result.is_handled() {
            if let Ok(command) = KeyCommand::from_str(command) {
                self.run_plain_command(command);
            }
        }
        result
    }

    /// A key was pressed. Keys without a binding are left to the host.
    pub fn handle_key(&mut self, event: &KeyEvent) -> HandleResult {
        match default_key_binding(event) {
            Some(command) => self.handle_key_command(command.as_ref()),
            None => HandleResult::NotHandled,
        }
    }

    fn run_plain_command(&mut self, command: KeyCommand) {
        let doc = &mut self.document;
        match command {
            KeyCommand::Backspace => doc.backspace(),
            KeyCommand::BackspaceWord => doc.backspace_word(),
            KeyCommand::BackspaceToStartOfLine => {
                doc.backspace_to_start_of_block()
            }
            KeyCommand::Delete => doc.delete(),
            KeyCommand::DeleteWord => doc.delete_word(),
            KeyCommand::DeleteToEndOfBlock => doc.delete_to_end_of_block(),
            KeyCommand::SplitBlock => doc.split_block(),
            KeyCommand::Bold
            | KeyCommand::Italic
            | KeyCommand::Underline
            | KeyCommand::Code
            | KeyCommand::Strikethrough => {}
        }
    }

    /// Save the document, queueing a notice either way.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        match self.persistence.save(&self.document) {
            Ok(()) => {
                self.notices.push(Notice::new(
                    NoticeLevel::Info,
                    self.config.save_notice.clone(),
                ));
                Ok(())
            }
            Err(err) => {
                log::error!("saving the document failed: {err}");
                self.notices.push(Notice::new(
                    NoticeLevel::Error,
                    format!("Content could not be saved: {err}"),
                ));
                Err(err)
            }
        }
    }

    /// Notices queued since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn persistence(&self) -> &PersistenceBridge<S> {
        &self.persistence
    }
}

impl<S: KeyValueStore> Editor<BlockModel, S> {
    /// HTML of the document, rendered with the configured style map.
    pub fn to_html(&self) -> String {
        self.document.to_html(&self.config.style_map)
    }

    /// The placeholder, while the document has no text.
    pub fn placeholder(&self) -> Option<&str> {
        if self.document.has_text() {
            None
        } else {
            Some(&self.config.placeholder)
        }
    }
}
