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

//! Editor configuration.
//!
//! | Key                   | Default                                  |
//! |-----------------------|------------------------------------------|
//! | `storageKey`          | `draftEditorContent`                     |
//! | `placeholder`         | `Type here...`                           |
//! | `saveNotice`          | `Content saved!`                         |
//! | `restoreFailedNotice` | `Saved content could not be restored...` |
//! | `styleMap`            | `red` and `underline` custom styles      |
//!
//! Every key is optional, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::StyleMap;

/// Key under which the document is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "draftEditorContent";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid editor configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub storage_key: String,
    /// Shown while the document has no text.
    pub placeholder: String,
    /// Acknowledgement shown after a successful save.
    pub save_notice: String,
    /// Warning shown when stored content exists but cannot be used.
    pub restore_failed_notice: String,
    /// CSS for custom inline styles.
    pub style_map: StyleMap,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            placeholder: "Type here...".to_owned(),
            save_notice: "Content saved!".to_owned(),
            restore_failed_notice:
                "Saved content could not be restored, starting with an empty \
                 document."
                    .to_owned(),
            style_map: StyleMap::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::InlineStyle;

    #[test]
    fn empty_object_gives_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.storage_key, "draftEditorContent");
        assert_eq!(config.placeholder, "Type here...");
        assert_eq!(config.save_notice, "Content saved!");
    }

    #[test]
    fn fields_can_be_overridden() {
        let config = EditorConfig::from_json(indoc! {r#"
            {
              "storageKey": "notes",
              "placeholder": "Write something",
              "styleMap": { "blue": { "color": "blue" } }
            }
        "#})
        .unwrap();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.placeholder, "Write something");
        assert_eq!(
            config.style_map.css_for(&InlineStyle::named("blue")).as_deref(),
            Some("color: blue")
        );
        assert!(!config.style_map.contains(&InlineStyle::named("red")));
        assert_eq!(config.save_notice, "Content saved!");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EditorConfig::from_json("{\"storageKey\": 3}"),
            Err(ConfigError::Json(_))
        ));
    }
}
