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

//! Flattened view of a block as runs of identically styled text.

use super::Block;
use crate::{InlineStyle, StyleSet};

/// A maximal stretch of characters sharing one style set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StyleRun<'a> {
    /// Character offset of the first character (inclusive).
    pub start: usize,
    /// Character offset after the last character (exclusive).
    pub end: usize,
    pub text: &'a str,
    pub styles: &'a StyleSet,
}

impl Block {
    /// Split the block into runs. Adjacent characters with equal style
    /// sets always share a run.
    pub(crate) fn style_runs(&self) -> Vec<StyleRun<'_>> {
        let bytes: Vec<usize> = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .collect();

        let mut runs = Vec::new();
        let mut run_start = 0;
        for i in 1..=self.styles.len() {
            if i == self.styles.len()
                || self.styles[i] != self.styles[run_start]
            {
                runs.push(StyleRun {
                    start: run_start,
                    end: i,
                    text: &self.text[bytes[run_start]..bytes[i]],
                    styles: &self.styles[run_start],
                });
                run_start = i;
            }
        }
        runs
    }

    /// Maximal `[start, end)` ranges of characters carrying `style`.
    pub(crate) fn ranges_with_style(
        &self,
        style: &InlineStyle,
    ) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        let mut open: Option<usize> = None;
        for (i, styles) in self.styles.iter().enumerate() {
            match (styles.contains(style), open) {
                (true, None) => open = Some(i),
                (false, Some(start)) => {
                    ranges.push((start, i));
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            ranges.push((start, self.styles.len()));
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use crate::{Block, BlockModel, InlineStyle};

    fn block_with_bold(text: &str, start: usize, end: usize) -> Block {
        let mut model = BlockModel::new();
        model.insert_text(text);
        let key = model.selection().block_key.clone();
        model.select(&key, start, end).unwrap();
        model.toggle_inline_style(&InlineStyle::Bold);
        model.current_block().clone()
    }

    #[test]
    fn empty_block_has_no_runs() {
        let model = BlockModel::new();
        assert!(model.current_block().style_runs().is_empty());
    }

    #[test]
    fn plain_block_is_one_run() {
        let mut model = BlockModel::new();
        model.insert_text("hello");
        let runs = model.current_block().style_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "hello");
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
    }

    #[test]
    fn bold_middle_gives_three_runs() {
        let block = block_with_bold("This is bold text", 8, 12);
        let runs = block.style_runs();
        let texts: Vec<&str> = runs.iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["This is ", "bold", " text"]);
        assert!(runs[1].styles.contains(&InlineStyle::Bold));
    }

    #[test]
    fn runs_slice_multibyte_text_correctly() {
        let block = block_with_bold("a😀b", 1, 2);
        let texts: Vec<&str> =
            block.style_runs().iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["a", "😀", "b"]);
    }

    #[test]
    fn ranges_with_style_finds_each_stretch() {
        let mut model = BlockModel::new();
        model.insert_text("aabbcc");
        let key = model.selection().block_key.clone();
        model.select(&key, 0, 2).unwrap();
        model.toggle_inline_style(&InlineStyle::Bold);
        model.select(&key, 4, 6).unwrap();
        model.toggle_inline_style(&InlineStyle::Bold);
        let block = model.current_block();
        assert_eq!(
            block.ranges_with_style(&InlineStyle::Bold),
            vec![(0, 2), (4, 6)]
        );
        assert!(block.ranges_with_style(&InlineStyle::Italic).is_empty());
    }
}
