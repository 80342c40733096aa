// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;

use crate::tag_stack::TagStack;
use crate::token::{tokens, TokenKind};

/// Counts the visible characters of `text`, i.e. everything outside tag
/// spans. O(n) over a single scan.
pub fn count_visible_chars(text: &str) -> usize {
    tokens(text)
        .filter(|t| t.kind == TokenKind::Char)
        .count()
}

/// Returns `text` with all tag spans removed.
///
/// Borrows when the text contains no tags, which is the common case for
/// ordinary dialog lines.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }
    let mut plain = String::with_capacity(text.len());
    for token in tokens(text) {
        if token.kind == TokenKind::Char {
            plain.push_str(token.text);
        }
    }
    Cow::Owned(plain)
}

/// Returns a prefix of `text` containing at most `visible_count` visible
/// characters, with synthetic closing tags appended so the result stays
/// tag-balanced for the whitelisted kinds.
///
/// Tag tokens encountered before the budget is exhausted are copied
/// verbatim; once the budget runs out, tags left open on the stack are
/// closed in reverse order of opening. If `visible_count` covers the whole
/// text the input is returned unchanged, which both preserves any trailing
/// tags and avoids allocation on the final frames of a reveal.
pub fn truncate_to_visible(text: &str, visible_count: usize) -> Cow<'_, str> {
    if visible_count == 0 || text.is_empty() {
        return Cow::Borrowed("");
    }
    if visible_count >= count_visible_chars(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut stack = TagStack::new();
    let mut seen = 0_usize;
    for token in tokens(text) {
        if seen >= visible_count {
            break;
        }
        match token.kind {
            TokenKind::Tag(_) => {
                out.push_str(token.text);
                stack.observe(token);
            }
            TokenKind::Char => {
                out.push_str(token.text);
                seen += 1;
            }
        }
    }
    for close in stack.closing() {
        out.push_str(close);
    }
    Cow::Owned(out)
}
