// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Typeline Bench
//!
//! This crate provides benchmarks for the Typeline library.

pub mod benches;

/// A few paragraphs of markup-heavy dialog, repeated to the requested
/// length in visible characters.
pub fn sample_dialog(visible_chars: usize) -> String {
    const PARAGRAPH: &str = "<color=yellow>Well met.</color> The <b>caravan</b> left at \
        dawn and the <i>storyteller</i> says the road south is washed out, so whatever \
        you are hauling had better keep. ";
    let mut text = String::new();
    while markup_text::count_visible_chars(&text) < visible_chars {
        text.push_str(PARAGRAPH);
    }
    text
}
