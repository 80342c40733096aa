// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared utilities for the integration tests.

use typeline::{build_pages, FixedAdvanceWrap, Page, TextStyle};

/// Paginates `text` with the fixed-advance oracle, so `width` is a column
/// count.
pub fn pages(text: &str, width: f32, lines_per_page: usize) -> Vec<Page> {
    build_pages(
        text,
        &TextStyle::default(),
        width,
        lines_per_page,
        &FixedAdvanceWrap::columns(),
    )
}

/// Concatenates the raw slices of `pages`.
pub fn rebuild(pages: &[Page]) -> String {
    pages.iter().map(Page::raw).collect()
}
