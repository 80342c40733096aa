// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::page::Page;

/// Typing speed used when a caller passes a non-positive speed.
pub const DEFAULT_CHARS_PER_SECOND: f32 = 35.0;

/// The animated typewriter position within the current page.
///
/// The cursor holds a monotonically non-decreasing visible-character count
/// and the timestamp of the last character it emitted. All time is
/// caller-supplied seconds from any monotonic clock; the cursor never reads
/// a clock itself, so a frame loop and a test drive it identically.
///
/// The count is advanced by whole characters: each call to
/// [`advance`](Self::advance) emits `floor(elapsed × speed)` characters and
/// consumes exactly the time those characters take, so fractional progress
/// carries over to the next frame instead of being dropped. Clamping to the
/// current page happens at read time via [`visible_on`](Self::visible_on),
/// which keeps the advancement itself idempotent for a given timeline.
#[derive(Clone, Copy, Debug)]
pub struct RevealCursor {
    visible: usize,
    last_char_time: f64,
}

impl RevealCursor {
    /// A cursor at the start of a page, with the typing timer anchored at
    /// `now`.
    pub fn new(now: f64) -> Self {
        Self {
            visible: 0,
            last_char_time: now,
        }
    }

    /// Advances the cursor to `now` at `chars_per_second`.
    ///
    /// A non-positive speed falls back to [`DEFAULT_CHARS_PER_SECOND`]
    /// rather than stalling the reveal. Calling with the same `now` twice
    /// is a no-op; calling with an earlier `now` is too.
    pub fn advance(&mut self, now: f64, chars_per_second: f32) {
        let speed = f64::from(if chars_per_second > 0.0 {
            chars_per_second
        } else {
            DEFAULT_CHARS_PER_SECOND
        });
        let elapsed = now - self.last_char_time;
        if elapsed <= 0.0 {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncation toward zero is the intended floor; `elapsed * speed` is positive and far below `usize::MAX`"
        )]
        let chars = (elapsed * speed) as usize;
        if chars > 0 {
            self.visible = self.visible.saturating_add(chars);
            self.last_char_time += chars as f64 / speed;
        }
    }

    /// The unclamped visible-character count.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// The count to draw for `page`: the cursor position clamped to the
    /// page's total visible characters. Recomputed every frame; monotonic
    /// within a page.
    pub fn visible_on(&self, page: &Page) -> usize {
        self.visible.min(page.visible_chars())
    }

    /// Whether `page` is fully revealed.
    pub fn is_complete(&self, page: &Page) -> bool {
        self.visible >= page.visible_chars()
    }

    /// Reveals all of `page` immediately (click-to-complete).
    pub fn skip_to_end(&mut self, page: &Page) {
        self.visible = self.visible.max(page.visible_chars());
    }

    /// Resets to the start of a new page or node, re-anchoring the typing
    /// timer at `now`.
    pub fn reset(&mut self, now: f64) {
        self.visible = 0;
        self.last_char_time = now;
    }
}

/// Tracks which page ordinals of a node have already fully typed, so a
/// page the player returns to renders instantly instead of replaying its
/// reveal.
#[derive(Clone, Debug, Default)]
pub struct SeenPages {
    seen: SmallVec<[usize; 8]>,
}

impl SeenPages {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `page_index` as fully typed.
    pub fn mark(&mut self, page_index: usize) {
        if !self.contains(page_index) {
            self.seen.push(page_index);
        }
    }

    /// Whether `page_index` has fully typed before.
    pub fn contains(&self, page_index: usize) -> bool {
        self.seen.contains(&page_index)
    }

    /// Forgets everything, for a node change.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::build_pages;
    use crate::style::TextStyle;
    use crate::wrap::FixedAdvanceWrap;

    fn one_page(text: &str) -> Page {
        let mut pages = build_pages(
            text,
            &TextStyle::default(),
            1000.0,
            100,
            &FixedAdvanceWrap::columns(),
        );
        assert_eq!(pages.len(), 1);
        pages.remove(0)
    }

    #[test]
    fn advances_by_elapsed_time() {
        let mut cursor = RevealCursor::new(0.0);
        // 8 cps, half a second: 4 characters.
        cursor.advance(0.5, 8.0);
        assert_eq!(cursor.visible(), 4);
    }

    #[test]
    fn fractional_progress_carries_over() {
        let mut cursor = RevealCursor::new(0.0);
        // 8 cps (one char per 0.125s); 0.2s yields 1 char and banks 0.075s.
        cursor.advance(0.2, 8.0);
        assert_eq!(cursor.visible(), 1);
        // At 0.4s the banked time yields two more, for 3 total; a timer
        // that reset on every frame would only have reached 2.
        cursor.advance(0.4, 8.0);
        assert_eq!(cursor.visible(), 3);
    }

    #[test]
    fn same_instant_is_idempotent() {
        let mut cursor = RevealCursor::new(0.0);
        cursor.advance(1.0, 8.0);
        let before = cursor.visible();
        cursor.advance(1.0, 8.0);
        assert_eq!(cursor.visible(), before);
    }

    #[test]
    fn never_decreases() {
        let mut cursor = RevealCursor::new(0.0);
        cursor.advance(1.0, 8.0);
        cursor.advance(0.5, 8.0);
        assert_eq!(cursor.visible(), 8);
    }

    #[test]
    fn non_positive_speed_falls_back() {
        let mut cursor = RevealCursor::new(0.0);
        cursor.advance(1.0, 0.0);
        assert_eq!(cursor.visible(), DEFAULT_CHARS_PER_SECOND as usize);
    }

    #[test]
    fn clamps_to_page() {
        let page = one_page("<b>Hi</b> there");
        let mut cursor = RevealCursor::new(0.0);
        cursor.advance(100.0, 50.0);
        assert_eq!(cursor.visible_on(&page), page.visible_chars());
        assert!(cursor.is_complete(&page));
    }

    #[test]
    fn skip_to_end_completes() {
        let page = one_page("a rather long line of dialog");
        let mut cursor = RevealCursor::new(0.0);
        assert!(!cursor.is_complete(&page));
        cursor.skip_to_end(&page);
        assert!(cursor.is_complete(&page));
        assert_eq!(cursor.visible_on(&page), page.visible_chars());
    }

    #[test]
    fn reset_rewinds_and_reanchors() {
        let mut cursor = RevealCursor::new(0.0);
        cursor.advance(2.0, 8.0);
        cursor.reset(2.0);
        assert_eq!(cursor.visible(), 0);
        cursor.advance(2.25, 8.0);
        assert_eq!(cursor.visible(), 2);
    }

    #[test]
    fn reveal_prefix_matches_count() {
        use markup_text::{count_visible_chars, truncate_to_visible};
        let page = one_page("<color=red>Hello</color> <b>World</b>");
        let mut cursor = RevealCursor::new(0.0);
        let mut t = 0.0;
        loop {
            t += 0.04;
            cursor.advance(t, 30.0);
            let shown = truncate_to_visible(page.rich(), cursor.visible_on(&page));
            assert_eq!(
                count_visible_chars(&shown),
                cursor.visible_on(&page),
                "typed prefix must expose exactly the revealed count"
            );
            if cursor.is_complete(&page) {
                break;
            }
        }
    }

    #[test]
    fn seen_pages_round_trip() {
        let mut seen = SeenPages::new();
        assert!(!seen.contains(0));
        seen.mark(0);
        seen.mark(2);
        seen.mark(0);
        assert!(seen.contains(0));
        assert!(!seen.contains(1));
        assert!(seen.contains(2));
        seen.clear();
        assert!(!seen.contains(2));
    }
}
