// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use markup_text::{PlainProjection, TagStack};

use crate::style::TextStyle;
use crate::wrap::WrapLines;

/// A contiguous slice of dialog text sized to fit a fixed number of wrapped
/// lines.
///
/// Pages are created in a batch by [`build_pages`] and replaced wholesale
/// whenever layout inputs change; they are never mutated individually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    start_plain: usize,
    start_rich: usize,
    raw: String,
    plain: String,
    rich: String,
    visible_chars: usize,
}

impl Page {
    /// Start byte offset of this page in the plain text.
    pub fn start_plain(&self) -> usize {
        self.start_plain
    }

    /// Start byte offset of this page in the markup text.
    pub fn start_rich(&self) -> usize {
        self.start_rich
    }

    /// The raw markup slice of this page, exactly as cut from the source
    /// text. Concatenating the raw slices of all pages reconstructs the
    /// source text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The plain text of this page.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// The page's markup with spans rebalanced: tags open at the page start
    /// are reopened before the raw slice and tags still open at the page
    /// end are closed after it, so the page renders as independently valid
    /// markup. This is what a reveal animation truncates.
    pub fn rich(&self) -> &str {
        &self.rich
    }

    /// The number of visible characters on this page.
    pub fn visible_chars(&self) -> usize {
        self.visible_chars
    }
}

/// Splits `rich_text` into pages of `lines_per_page` wrapped lines.
///
/// The text is projected onto its plain form, measured by the `oracle` at
/// `width_px` under `style`, and cut at line boundaries every
/// `lines_per_page` lines. Each cut is projected back into markup space and
/// the affected formatting spans are reopened/closed per page (see
/// [`Page::rich`]). A color region spanning two pages, for example,
/// re-declares its color on the continuation page.
///
/// `lines_per_page` and `width_px` are clamped to a minimum of 1 so that
/// pagination always terminates. Empty text yields a single empty page. If
/// the whole text fits within `lines_per_page` lines, the single returned
/// page spans it unchanged.
///
/// Building is synchronous and unbounded; callers memoize the result in a
/// [`LayoutCache`](crate::LayoutCache) rather than calling this per frame.
pub fn build_pages<W: WrapLines + ?Sized>(
    rich_text: &str,
    style: &TextStyle,
    width_px: f32,
    lines_per_page: usize,
    oracle: &W,
) -> Vec<Page> {
    let lines_per_page = lines_per_page.max(1);
    let width_px = width_px.max(1.0);

    let projection = PlainProjection::new(rich_text);
    let lines = oracle.wrap_lines(projection.plain(), style, width_px);
    debug_assert!(
        lines.windows(2).all(|pair| pair[0].start < pair[1].start),
        "wrap oracle must return monotonically increasing line starts"
    );

    let mut plain_starts = vec![0_usize];
    if lines.len() > lines_per_page {
        for i in (lines_per_page..lines.len()).step_by(lines_per_page) {
            plain_starts.push(lines[i].start);
        }
    }
    // Guards against pathological wrap outputs producing repeated or
    // out-of-order boundaries.
    plain_starts.sort_unstable();
    plain_starts.dedup();

    let rich_starts: Vec<usize> = plain_starts
        .iter()
        .map(|&p| projection.map_plain_to_rich(p))
        .collect();

    let plain = projection.plain();
    let mut pages = Vec::with_capacity(rich_starts.len());
    for (i, &start_rich) in rich_starts.iter().enumerate() {
        let end_rich = rich_starts.get(i + 1).copied().unwrap_or(rich_text.len());
        let start_plain = plain_starts[i];
        let end_plain = plain_starts.get(i + 1).copied().unwrap_or(plain.len());

        let raw = &rich_text[start_rich..end_rich];
        let page_plain = &plain[start_plain..end_plain];

        let open_at_start = TagStack::at(rich_text, start_rich);
        let open_at_end = TagStack::at(rich_text, end_rich);
        let mut rich = String::with_capacity(
            raw.len() + open_at_start.len() * 12 + open_at_end.len() * 8,
        );
        for tag in open_at_start.opening() {
            rich.push_str(tag);
        }
        rich.push_str(raw);
        for close in open_at_end.closing() {
            rich.push_str(close);
        }

        pages.push(Page {
            start_plain,
            start_rich,
            raw: raw.into(),
            plain: page_plain.into(),
            rich,
            visible_chars: page_plain.chars().count(),
        });
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::FixedAdvanceWrap;
    use markup_text::count_visible_chars;

    fn pages(text: &str, cols: f32, lines_per_page: usize) -> Vec<Page> {
        build_pages(
            text,
            &TextStyle::default(),
            cols,
            lines_per_page,
            &FixedAdvanceWrap::columns(),
        )
    }

    #[test]
    fn empty_text_is_one_empty_page() {
        let got = pages("", 10.0, 3);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].raw(), "");
        assert_eq!(got[0].rich(), "");
        assert_eq!(got[0].visible_chars(), 0);
    }

    #[test]
    fn single_page_fast_path_returns_whole_input() {
        let text = "<b>short</b>";
        let got = pages(text, 80.0, 3);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].raw(), text);
        assert_eq!(got[0].rich(), text);
        assert_eq!(got[0].start_rich(), 0);
    }

    #[test]
    fn closed_span_needs_no_reopen() {
        // Wraps as "Hello " / "World"; the color span closes on page 0.
        let got = pages("<color=red>Hello</color> World", 5.0, 1);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].rich(), "<color=red>Hello</color> ");
        assert_eq!(got[1].rich(), "World");
        assert_eq!(got[1].start_plain(), 6);
    }

    #[test]
    fn spanning_bold_reopens_on_every_page() {
        // Three lines, all inside one bold span, one line per page.
        let got = pages("<b>one two three</b>", 6.0, 1);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].rich(), "<b>one </b>");
        assert_eq!(got[1].rich(), "<b>two </b>");
        assert_eq!(got[2].rich(), "<b>three</b>");
    }

    #[test]
    fn page_cut_mid_span_keeps_later_close_balanced() {
        // The span closes partway through page 1; no stray close may be
        // appended after it.
        let got = pages("<b>one two</b> three", 6.0, 1);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].rich(), "<b>one </b>");
        assert_eq!(got[1].rich(), "<b>two</b> ");
        assert_eq!(got[2].rich(), "three");
    }

    #[test]
    fn coverage_raw_slices_reconstruct_source() {
        let text = "<color=red>The quick</color> brown <b>fox jumps over</b> the lazy dog";
        let got = pages(text, 8.0, 2);
        assert!(got.len() > 1);
        let mut rebuilt = String::new();
        for page in &got {
            rebuilt.push_str(page.raw());
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn pages_are_tag_balanced() {
        let text = "<color=red>The quick</color> brown <b>fox jumps over</b> the lazy dog";
        for lines_per_page in 1..4 {
            for page in pages(text, 6.0, lines_per_page) {
                let stack = markup_text::TagStack::at(page.rich(), page.rich().len());
                assert!(
                    stack.is_empty(),
                    "page {:?} leaves tags open",
                    page.rich()
                );
            }
        }
    }

    #[test]
    fn idempotent() {
        let text = "<b>some words</b> that wrap across a few lines here";
        assert_eq!(pages(text, 7.0, 2), pages(text, 7.0, 2));
    }

    #[test]
    fn visible_chars_match_plain() {
        let got = pages("<b>one two three</b>", 4.0, 1);
        for page in &got {
            assert_eq!(page.visible_chars(), page.plain().chars().count());
            assert_eq!(page.visible_chars(), count_visible_chars(page.raw()));
        }
    }

    #[test]
    fn zero_lines_per_page_clamps_to_one() {
        let got = pages("one two three", 6.0, 0);
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn long_single_turn_still_splits() {
        let text = "word ".repeat(40);
        let got = pages(&text, 10.0, 4);
        assert!(got.len() > 1);
        let rebuilt: String = got.iter().map(Page::raw).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn tag_only_text_is_single_page() {
        let text = "<color=red></color>";
        let got = pages(text, 5.0, 1);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].raw(), text);
        assert_eq!(got[0].visible_chars(), 0);
    }
}
