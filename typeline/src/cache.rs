// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::BuildHasher;

use foldhash::fast::FixedState;

use crate::page::{build_pages, Page};
use crate::style::TextStyle;
use crate::wrap::WrapLines;

/// Pixel widths and font sizes closer than this are the same layout.
const APPROX_TOLERANCE: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    let d = a - b;
    let d = if d < 0.0 { -d } else { d };
    d <= APPROX_TOLERANCE
}

fn text_hash(text: &str) -> u64 {
    FixedState::default().hash_one(text)
}

/// The identity of one paginated layout.
///
/// Text identity is a content hash, so identical content hits the cache
/// even when it arrives in a different source object.
#[derive(Clone, Copy, Debug)]
struct LayoutKey {
    text_hash: u64,
    width_px: f32,
    lines_per_page: usize,
    font_size: f32,
}

/// A lookup key distinct from the stored key: it hashes the candidate text
/// once and compares against entries without owning anything.
struct LayoutQuery {
    key: LayoutKey,
}

impl LayoutQuery {
    fn new(text: &str, style: &TextStyle, width_px: f32, lines_per_page: usize) -> Self {
        Self {
            key: LayoutKey {
                text_hash: text_hash(text),
                width_px,
                lines_per_page,
                font_size: style.font_size,
            },
        }
    }

    fn matches(&self, other: &LayoutKey) -> bool {
        self.key.text_hash == other.text_hash
            && self.key.lines_per_page == other.lines_per_page
            && approx_eq(self.key.width_px, other.width_px)
            && approx_eq(self.key.font_size, other.font_size)
    }
}

#[derive(Debug)]
struct Entry {
    epoch: u64,
    key: LayoutKey,
    pages: Vec<Page>,
}

/// A least-recently-used cache of paginated layouts.
///
/// Keyed by (text content, wrap width, lines per page, font size); any
/// mismatch discards the old entry and rebuilds wholesale via
/// [`build_pages`], never patching incrementally, since a one-character
/// edit anywhere can shift every downstream line break.
///
/// The cache uses a linear scan of its entries, which is optimal for the
/// handful of dialog nodes on screen at once. Keep `max_entries` low, in
/// the order of tens.
#[derive(Debug)]
pub struct LayoutCache {
    entries: Vec<Entry>,
    epoch: u64,
    max_entries: usize,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(8)
    }
}

impl LayoutCache {
    /// A cache holding at most `max_entries` layouts.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the pages for the given inputs, building them on a miss.
    ///
    /// Lookups never fail; a miss simply triggers a rebuild through the
    /// `oracle`. On a hit the build is skipped entirely and the entry is
    /// marked most recently used.
    pub fn pages<W: WrapLines + ?Sized>(
        &mut self,
        text: &str,
        style: &TextStyle,
        width_px: f32,
        lines_per_page: usize,
        oracle: &W,
    ) -> &[Page] {
        let query = LayoutQuery::new(text, style, width_px, lines_per_page);
        self.epoch += 1;
        let index = self.find_entry(&query, || {
            build_pages(text, style, width_px, lines_per_page, oracle)
        });
        let entry = &mut self.entries[index];
        entry.epoch = self.epoch;
        &entry.pages
    }

    /// Returns the index of the entry matching `query`, building and
    /// inserting one via `build` on a miss (evicting the least recently
    /// used entry when full).
    fn find_entry(&mut self, query: &LayoutQuery, build: impl FnOnce() -> Vec<Page>) -> usize {
        let epoch = self.epoch;
        let mut lowest_epoch = epoch;
        let mut lowest_index = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if query.matches(&entry.key) {
                return i;
            }
            if entry.epoch < lowest_epoch {
                lowest_epoch = entry.epoch;
                lowest_index = i;
            }
        }
        let entry = Entry {
            epoch,
            key: query.key,
            pages: build(),
        };
        if self.entries.len() < self.max_entries {
            lowest_index = self.entries.len();
            self.entries.push(entry);
        } else {
            self.entries[lowest_index] = entry;
        }
        lowest_index
    }

    /// Drops the entry for the given inputs, if present.
    ///
    /// Callers invalidate explicitly when the underlying text or layout
    /// parameters are known to have changed: node switch, font-size setting
    /// change, window resize.
    pub fn invalidate(
        &mut self,
        text: &str,
        style: &TextStyle,
        width_px: f32,
        lines_per_page: usize,
    ) {
        let query = LayoutQuery::new(text, style, width_px, lines_per_page);
        self.entries.retain(|entry| !query.matches(&entry.key));
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The number of cached layouts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
