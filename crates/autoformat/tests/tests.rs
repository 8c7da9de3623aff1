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

#![cfg(not(target_arch = "wasm32"))]

use autoformat::{
    BlockModel, BlockType, Editor, EditorConfig, HandleResult, InlineStyle,
    KeyEvent, KeyValueStore, MemoryStore, NoticeLevel, PersistenceBridge,
    RawContent, RichTextDocument, TriggerDetector, DEFAULT_STORAGE_KEY,
};
use indoc::indoc;
use speculoos::prelude::*;

type TestEditor = Editor<BlockModel, MemoryStore>;

fn mount(store: MemoryStore) -> TestEditor {
    Editor::mount(store, EditorConfig::default())
}

fn type_text(editor: &mut TestEditor, text: &str) {
    for ch in text.chars() {
        editor.handle_before_input(&ch.to_string());
    }
}

/// Copy what `editor` saved into a fresh store, as a page reload would.
fn reload(editor: &TestEditor) -> TestEditor {
    let store = MemoryStore::new();
    if let Some(json) = editor
        .persistence()
        .store()
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap()
    {
        store.set_item(DEFAULT_STORAGE_KEY, &json).unwrap();
    }
    mount(store)
}

// =======================================================================
// Triggers
// =======================================================================

#[test]
fn header_trigger_then_typing() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "# Hello");
    let doc = editor.document();
    assert_that!(doc.current_block_text()).is_equal_to("Hello");
    assert_that!(doc.current_block_type()).is_equal_to(BlockType::HeaderOne);
}

#[test]
fn each_star_trigger_styles_following_text() {
    let cases = [
        ("* bold", InlineStyle::Bold),
        ("** red", InlineStyle::named("red")),
        ("*** under", InlineStyle::Underline),
    ];
    for (input, style) in cases {
        let mut editor = mount(MemoryStore::new());
        type_text(&mut editor, input);
        let block = editor.document().current_block();
        assert_that!(block.ranges_len_with(&style))
            .named(input)
            .is_equal_to(block.len());
    }
}

trait StyledLength {
    fn ranges_len_with(&self, style: &InlineStyle) -> usize;
}

impl StyledLength for autoformat::Block {
    fn ranges_len_with(&self, style: &InlineStyle) -> usize {
        (0..self.len())
            .filter(|&i| self.style_at(i).is_some_and(|s| s.contains(style)))
            .count()
    }
}

#[test]
fn trigger_only_fires_on_whole_block_text() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "see #");
    assert_that!(editor.handle_before_input(" "))
        .is_equal_to(HandleResult::NotHandled);
    assert_that!(editor.document().current_block_text())
        .is_equal_to("see # ");
    assert_that!(editor.document().current_block_type())
        .is_equal_to(BlockType::Unstyled);
}

#[test]
fn trigger_in_second_block() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "intro");
    editor.handle_key(&KeyEvent::new("Enter"));
    type_text(&mut editor, "# Part two");
    assert_that!(editor.to_html())
        .is_equal_to("<p>intro</p><h1>Part two</h1>".to_owned());
}

#[test]
fn detector_works_against_the_trait() {
    fn apply(doc: &mut dyn RichTextDocument) -> HandleResult {
        TriggerDetector::default().handle_before_input(doc, " ")
    }
    let mut model = BlockModel::new();
    model.insert_text("***");
    assert_that!(apply(&mut model)).is_equal_to(HandleResult::Handled);
    assert_that!(model.has_inline_style(&InlineStyle::Underline)).is_true();
}

// =======================================================================
// Persistence
// =======================================================================

#[test]
fn save_and_reload_round_trip() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "# Title");
    editor.handle_key(&KeyEvent::new("Enter"));
    editor.handle_key(&KeyEvent::new("Backspace"));
    type_text(&mut editor, "** warm words");
    editor.save().unwrap();

    let reloaded = reload(&editor);
    assert_that!(reloaded.document().to_raw())
        .is_equal_to(editor.document().to_raw());
    assert_that!(reloaded.to_html()).is_equal_to(editor.to_html());
}

#[test]
fn saving_twice_stores_the_same_value() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "* same");
    editor.save().unwrap();
    let first = editor
        .persistence()
        .store()
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap();
    editor.save().unwrap();
    let second = editor
        .persistence()
        .store()
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap();
    assert_that!(first).is_equal_to(second);
}

#[test]
fn mount_with_nothing_stored_is_empty_and_quiet() {
    let mut editor = mount(MemoryStore::new());
    assert_that!(editor.document().has_text()).is_false();
    assert_that!(editor.placeholder()).is_equal_to(Some("Type here..."));
    assert_that!(editor.take_notices()).is_empty();
}

#[test]
fn mount_with_corrupt_value_warns() {
    let store = MemoryStore::new();
    store.set_item(DEFAULT_STORAGE_KEY, "definitely not json").unwrap();
    let mut editor = mount(store);
    assert_that!(editor.document().has_text()).is_false();
    let notices = editor.take_notices();
    assert_that!(notices).has_length(1);
    assert_that!(notices[0].level).is_equal_to(NoticeLevel::Warning);
}

#[test]
fn mount_with_overflowing_style_range_warns() {
    let store = MemoryStore::new();
    let json = format!(
        r#"{{"blocks":[{{"key":"a","text":"ab","inlineStyleRanges":
            [{{"offset":{},"length":1,"style":"BOLD"}}]}}]}}"#,
        usize::MAX
    );
    store.set_item(DEFAULT_STORAGE_KEY, &json).unwrap();
    let mut editor = mount(store);
    assert_that!(editor.document().has_text()).is_false();
    let notices = editor.take_notices();
    assert_that!(notices).has_length(1);
    assert_that!(notices[0].level).is_equal_to(NoticeLevel::Warning);
}

#[test]
fn mount_with_empty_stored_value_is_quiet() {
    let store = MemoryStore::new();
    store.set_item(DEFAULT_STORAGE_KEY, "").unwrap();
    let mut editor = mount(store);
    assert_that!(editor.document().has_text()).is_false();
    assert_that!(editor.take_notices()).is_empty();
}

#[test]
fn mount_restores_handwritten_raw_content() {
    let store = MemoryStore::new();
    store
        .set_item(
            DEFAULT_STORAGE_KEY,
            indoc! {r#"
                {
                  "blocks": [
                    { "key": "aaaaa", "text": "Hello", "type": "header-one" },
                    {
                      "key": "bbbbb",
                      "text": "red text",
                      "type": "unstyled",
                      "inlineStyleRanges": [
                        { "offset": 0, "length": 3, "style": "red" }
                      ]
                    }
                  ],
                  "entityMap": {}
                }
            "#},
        )
        .unwrap();
    let editor = mount(store);
    assert_that!(editor.to_html()).is_equal_to(
        "<h1>Hello</h1><p><span style=\"color: red\">red</span> text</p>"
            .to_owned(),
    );
}

#[test]
fn full_store_reports_an_error_notice() {
    let mut editor = mount(MemoryStore::with_quota(32));
    type_text(&mut editor, "some text that will not fit in the quota");
    assert_that!(editor.save()).is_err();
    let notices = editor.take_notices();
    assert_that!(notices).has_length(1);
    assert_that!(notices[0].level).is_equal_to(NoticeLevel::Error);
}

#[test]
fn bridge_load_is_strict() {
    let bridge = PersistenceBridge::new(MemoryStore::new(), "k");
    bridge.store().set_item("k", r#"{"blocks":[{"key":"a"},{"key":"a"}]}"#)
        .unwrap();
    let result: Result<Option<BlockModel>, _> = bridge.load();
    assert_that!(result).is_err();
}

#[test]
fn raw_content_is_the_stored_format() {
    let mut editor = mount(MemoryStore::new());
    type_text(&mut editor, "# Hi");
    editor.save().unwrap();
    let json = editor
        .persistence()
        .store()
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap();
    let raw = RawContent::from_json(&json).unwrap();
    assert_that!(raw.blocks).has_length(1);
    assert_that!(raw.blocks[0].block_type).is_equal_to(BlockType::HeaderOne);
    assert_that!(raw.blocks[0].text.as_str()).is_equal_to("Hi");
}
