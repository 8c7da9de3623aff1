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

//! JavaScript bindings for the autoformat editor, persisting to the page's
//! `localStorage`.

use std::sync::Once;

use autoformat::{
    BlockModel, Editor, EditorConfig, KeyEvent, LocalStorage, Notice,
};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let message = JsValue::from_str(&format!(
            "{}: {}",
            record.target(),
            record.args()
        ));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            log::Level::Warn => web_sys::console::warn_1(&message),
            log::Level::Info => web_sys::console::info_1(&message),
            log::Level::Debug | log::Level::Trace => {
                web_sys::console::debug_1(&message)
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    });
}

fn notice_to_js(notice: &Notice) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    let level = JsValue::from_str(&notice.level.to_string());
    let message = JsValue::from_str(&notice.message);
    Reflect::set(&obj, &JsValue::from_str("level"), &level)?;
    Reflect::set(&obj, &JsValue::from_str("message"), &message)?;
    Ok(obj.into())
}

#[wasm_bindgen]
pub struct AutoformatEditor {
    inner: Editor<BlockModel, LocalStorage>,
}

#[wasm_bindgen]
impl AutoformatEditor {
    /// Mount an editor, restoring any saved document. `config_json` is an
    /// optional JSON editor configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
    ) -> Result<AutoformatEditor, JsError> {
        init();
        let config = match config_json {
            Some(json) => EditorConfig::from_json(&json)?,
            None => EditorConfig::default(),
        };
        let store = LocalStorage::open()?;
        Ok(Self {
            inner: Editor::mount(store, config),
        })
    }

    /// Returns `"handled"` or `"not-handled"`.
    pub fn handle_before_input(&mut self, chars: &str) -> String {
        self.inner.handle_before_input(chars).to_string()
    }

    /// Returns `"handled"` or `"not-handled"`.
    pub fn handle_key_command(&mut self, command: &str) -> String {
        self.inner.handle_key_command(command).to_string()
    }

    /// Feed a `keydown` event. Returns `"handled"` or `"not-handled"`.
    pub fn handle_key_down(
        &mut self,
        key: &str,
        ctrl: bool,
        meta: bool,
        alt: bool,
        shift: bool,
    ) -> String {
        let event = KeyEvent {
            key: key.to_owned(),
            ctrl,
            meta,
            alt,
            shift,
        };
        self.inner.handle_key(&event).to_string()
    }

    pub fn select(
        &mut self,
        block_key: &str,
        anchor: u32,
        focus: u32,
    ) -> Result<(), JsError> {
        self.inner
            .document_mut()
            .select(block_key, anchor as usize, focus as usize)?;
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), JsError> {
        self.inner.save()?;
        Ok(())
    }

    /// Pending notices as `{ level, message }` objects.
    pub fn take_notices(&mut self) -> Result<Array, JsValue> {
        let notices = Array::new();
        for notice in self.inner.take_notices() {
            notices.push(&notice_to_js(&notice)?);
        }
        Ok(notices)
    }

    pub fn to_html(&self) -> String {
        self.inner.to_html()
    }

    pub fn plain_text(&self) -> String {
        self.inner.document().get_content_as_plain_text()
    }

    /// The placeholder text, or `undefined` once the document has text.
    pub fn placeholder(&self) -> Option<String> {
        self.inner.placeholder().map(str::to_owned)
    }

    /// Debug dump of the document and selection.
    pub fn to_tree(&self) -> String {
        self.inner.document().to_tree()
    }
}
