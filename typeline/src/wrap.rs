// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line-wrap capability boundary.

use alloc::vec::Vec;

use unicode_width::UnicodeWidthChar;

use crate::style::TextStyle;

/// One wrapped line: a byte span into the measured plain text.
///
/// Spans are contiguous and in top-to-bottom order; `start` values are
/// strictly increasing across a wrap result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    /// Start byte offset of the line.
    pub start: usize,
    /// End byte offset (exclusive) of the line, including any trailing
    /// whitespace or newline that ends it.
    pub end: usize,
}

/// Measures how plain text wraps to a pixel width.
///
/// This is the one capability the paginator consumes from the embedding
/// renderer rather than implementing itself. Requirements on an
/// implementation: word-wrap with no vertical limit, lines returned
/// left-to-right top-to-bottom, monotonically increasing `start` offsets,
/// and a deterministic line count for identical inputs. The paginator
/// additionally guards against duplicate boundaries, so a pathological
/// oracle degrades rather than breaking pagination.
pub trait WrapLines {
    /// Wraps `text` at `max_width` pixels under `style`.
    ///
    /// Always returns at least one line; empty text yields one empty line.
    fn wrap_lines(&self, text: &str, style: &TextStyle, max_width: f32) -> Vec<Line>;
}

/// A deterministic fixed-pitch wrap oracle.
///
/// Every character occupies its Unicode display-width in columns times
/// `advance` pixels; the font identity and size in the style are ignored,
/// as with a bitmap terminal font. Greedy word wrap: a line breaks at the
/// most recent whitespace when the next word would overflow, trailing
/// whitespace hangs past the margin, and a word wider than the whole line
/// is broken anywhere rather than overflowing (emergency break).
///
/// With `advance = 1.0` the width is simply a column count, which makes
/// wrap positions easy to pin down in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvanceWrap {
    /// Pixels per display-width column.
    pub advance: f32,
}

impl FixedAdvanceWrap {
    /// An oracle where width is measured directly in columns.
    pub fn columns() -> Self {
        Self { advance: 1.0 }
    }
}

impl WrapLines for FixedAdvanceWrap {
    fn wrap_lines(&self, text: &str, _style: &TextStyle, max_width: f32) -> Vec<Line> {
        let advance = if self.advance > 0.0 { self.advance } else { 1.0 };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncation toward zero matches floor for the positive widths the paginator clamps to"
        )]
        let max_cols = ((max_width.max(1.0) / advance) as usize).max(1);

        let mut lines = Vec::new();
        let mut line_start = 0_usize;
        let mut cols = 0_usize;
        // End of the most recent whitespace run on the current line.
        let mut break_after_ws: Option<usize> = None;

        for (i, c) in text.char_indices() {
            if c == '\n' {
                lines.push(Line {
                    start: line_start,
                    end: i + 1,
                });
                line_start = i + 1;
                cols = 0;
                break_after_ws = None;
                continue;
            }
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if c.is_whitespace() {
                // Trailing whitespace hangs; it never forces a break.
                cols += w;
                break_after_ws = Some(i + c.len_utf8());
                continue;
            }
            if cols + w > max_cols {
                let break_at = break_after_ws.filter(|&b| b > line_start).unwrap_or(i);
                if break_at > line_start {
                    lines.push(Line {
                        start: line_start,
                        end: break_at,
                    });
                    line_start = break_at;
                    cols = col_count(&text[line_start..i]);
                    break_after_ws = None;
                }
            }
            cols += w;
        }
        if line_start < text.len() || lines.is_empty() {
            lines.push(Line {
                start: line_start,
                end: text.len(),
            });
        }
        lines
    }
}

fn col_count(text: &str) -> usize {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}
