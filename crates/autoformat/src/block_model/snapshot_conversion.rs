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

//! Conversion between [`BlockModel`] and [`RawContent`].

use serde_json::Map;

use super::{Block, BlockModel};
use crate::{
    InlineStyle, RawBlock, RawContent, RawInlineStyleRange, SnapshotError,
    StyleSet,
};

impl Block {
    fn to_raw(&self) -> RawBlock {
        let mut inline_style_ranges = Vec::new();
        for style in self.styles_in_order_of_appearance() {
            for (start, end) in self.ranges_with_style(&style) {
                inline_style_ranges.push(RawInlineStyleRange {
                    offset: start,
                    length: end - start,
                    style: style.clone(),
                });
            }
        }

        RawBlock {
            key: self.key.clone(),
            text: self.text.clone(),
            block_type: self.block_type,
            depth: self.depth,
            inline_style_ranges,
            entity_ranges: Vec::new(),
            data: self.data.clone(),
        }
    }

    fn styles_in_order_of_appearance(&self) -> Vec<InlineStyle> {
        let mut seen: Vec<InlineStyle> = Vec::new();
        for style in self.styles.iter().flatten() {
            if !seen.contains(style) {
                seen.push(style.clone());
            }
        }
        seen
    }

    fn from_raw(raw: RawBlock) -> Self {
        let len = raw.text.chars().count();
        let mut styles = vec![StyleSet::new(); len];
        for range in &raw.inline_style_ranges {
            let end = range.offset + range.length;
            for styles_at in &mut styles[range.offset..end] {
                styles_at.insert(range.style.clone());
            }
        }
        if !raw.entity_ranges.is_empty() {
            log::debug!(
                "dropping {} entity ranges of block {:?}",
                raw.entity_ranges.len(),
                raw.key
            );
        }

        Self {
            key: raw.key,
            block_type: raw.block_type,
            depth: raw.depth,
            text: raw.text,
            styles,
            data: raw.data,
        }
    }
}

impl BlockModel {
    /// The raw form of the document, as written to storage.
    pub fn to_raw(&self) -> RawContent {
        RawContent {
            blocks: self.blocks.iter().map(Block::to_raw).collect(),
            entity_map: Map::new(),
        }
    }

    /// Rebuild a document from its raw form. The cursor starts at the
    /// beginning of the first block.
    pub fn from_raw(raw: RawContent) -> Result<Self, SnapshotError> {
        raw.validate()?;
        let blocks = raw.blocks.into_iter().map(Block::from_raw).collect();
        let mut model = Self::from_blocks(blocks);

        for index in 0..model.blocks.len() {
            if model.blocks[index].key.is_empty() {
                model.blocks[index].key = model.new_block_key();
            }
        }
        let first = model.blocks[0].key.clone();
        model.selection.block_key = first;

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::{
        BlockModel, BlockType, InlineStyle, RawContent, SnapshotError,
    };

    fn styled_model() -> BlockModel {
        let mut model = BlockModel::new();
        model.toggle_block_type(BlockType::HeaderOne);
        model.insert_text("Hello world");
        let key = model.selection().block_key.clone();
        model.select(&key, 6, 11).unwrap();
        model.toggle_inline_style(&InlineStyle::named("red"));
        model.select(&key, 0, 7).unwrap();
        model.toggle_inline_style(&InlineStyle::Bold);
        model.select_end();
        model.split_block();
        model.set_block_type(BlockType::Unstyled);
        model.toggle_inline_style(&InlineStyle::named("red"));
        model.insert_text("second");
        model
    }

    #[test]
    fn to_raw_lists_styles_in_order_of_first_appearance() {
        let raw = styled_model().to_raw();
        let ranges: Vec<(usize, usize, &str)> = raw.blocks[0]
            .inline_style_ranges
            .iter()
            .map(|r| (r.offset, r.length, r.style.name()))
            .collect();
        assert_eq!(ranges, vec![(0, 7, "BOLD"), (6, 5, "red")]);
        assert_eq!(raw.blocks[0].block_type, BlockType::HeaderOne);
        assert_eq!(raw.blocks[1].text, "second");
        assert!(raw.blocks[1].inline_style_ranges.is_empty());
    }

    #[test]
    fn raw_round_trip_keeps_content() {
        let model = styled_model();
        let restored = BlockModel::from_raw(model.to_raw()).unwrap();
        assert_eq!(restored.blocks(), model.blocks());
        assert_eq!(restored.selection().block_key, model.blocks()[0].key());
        assert_eq!(restored.selection().start(), 0);
    }

    #[test]
    fn json_round_trip_is_stable() {
        let json = styled_model().to_raw().to_json().unwrap();
        let again = BlockModel::from_raw(RawContent::from_json(&json).unwrap())
            .unwrap()
            .to_raw()
            .to_json()
            .unwrap();
        assert_eq!(json, again);
    }

    #[test]
    fn empty_block_list_becomes_one_empty_block() {
        let model = BlockModel::from_raw(RawContent::default()).unwrap();
        assert_eq!(model.blocks().len(), 1);
        assert_eq!(model.current_block_type(), BlockType::Unstyled);
        assert!(!model.has_text());
    }

    #[test]
    fn missing_keys_are_generated() {
        let raw =
            RawContent::from_json(r#"{"blocks":[{"text":"a"},{"text":"b"}]}"#)
                .unwrap();
        let model = BlockModel::from_raw(raw).unwrap();
        let keys: Vec<&str> = model.blocks().iter().map(|b| b.key()).collect();
        assert!(keys.iter().all(|k| !k.is_empty()));
        assert_ne!(keys[0], keys[1]);
        assert_eq!(model.selection().block_key, keys[0]);
    }

    #[test]
    fn entities_and_data_are_handled() {
        let json = indoc! {r#"
            {
              "blocks": [{
                "key": "img01",
                "text": " ",
                "type": "atomic",
                "entityRanges": [{ "offset": 0, "length": 1, "key": 0 }],
                "data": { "align": "left" }
              }],
              "entityMap": { "0": { "type": "IMAGE" } }
            }
        "#};
        let model =
            BlockModel::from_raw(RawContent::from_json(json).unwrap()).unwrap();
        let raw = model.to_raw();
        assert!(raw.blocks[0].entity_ranges.is_empty());
        assert!(raw.entity_map.is_empty());
        assert_eq!(raw.blocks[0].data.get("align").unwrap(), "left");
    }

    #[test]
    fn invalid_raw_content_is_rejected() {
        let raw = RawContent::from_json(
            r#"{"blocks":[{"key":"a","text":"ab",
                "inlineStyleRanges":[
                  {"offset":1,"length":5,"style":"BOLD"}]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            BlockModel::from_raw(raw),
            Err(SnapshotError::RangeOutOfBounds { .. })
        ));
    }
}
