// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for pagination and typewriter truncation.

use std::hint::black_box;

use tango_bench::{Benchmark, benchmark_fn};
use typeline::{FixedAdvanceWrap, LayoutCache, TextStyle, build_pages};

use crate::sample_dialog;

/// Benchmark for a cold pagination of increasingly long dialog texts.
pub fn pagination() -> Vec<Benchmark> {
    const WIDTH: f32 = 60.0;
    const LINES_PER_PAGE: usize = 6;

    [500, 5_000, 50_000]
        .into_iter()
        .map(|size| {
            let text = sample_dialog(size);
            benchmark_fn(format!("Paginate - {size} visible chars"), move |b| {
                let text = text.clone();
                b.iter(move || {
                    let pages = build_pages(
                        &text,
                        &TextStyle::default(),
                        WIDTH,
                        LINES_PER_PAGE,
                        &FixedAdvanceWrap::columns(),
                    );
                    black_box(pages);
                })
            })
        })
        .collect()
}

/// Benchmark for warm cache lookups, the per-frame path.
pub fn cache_hits() -> Vec<Benchmark> {
    const WIDTH: f32 = 60.0;
    const LINES_PER_PAGE: usize = 6;

    vec![benchmark_fn("Cache hit - 5000 visible chars", |b| {
        let text = sample_dialog(5_000);
        let style = TextStyle::default();
        let oracle = FixedAdvanceWrap::columns();
        let mut cache = LayoutCache::default();
        cache.pages(&text, &style, WIDTH, LINES_PER_PAGE, &oracle);
        b.iter(move || {
            let pages = cache.pages(&text, &style, WIDTH, LINES_PER_PAGE, &oracle);
            black_box(pages.len());
        })
    })]
}

/// Benchmark for the per-frame reveal truncation.
pub fn truncation() -> Vec<Benchmark> {
    vec![benchmark_fn("Truncate mid-page", |b| {
        let text = sample_dialog(500);
        let total = markup_text::count_visible_chars(&text);
        b.iter(move || {
            let shown = markup_text::truncate_to_visible(&text, total / 2);
            black_box(shown.len());
        })
    })]
}
