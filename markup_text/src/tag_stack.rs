// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconstruction of the formatting tags open at a given offset.
//!
//! Only a whitelisted set of tag kinds participates in the stack: color,
//! bold, italic and size. All other tags are inert for structural purposes
//! but are still copied verbatim by the surrounding code (truncation and
//! page slicing), never reconstructed.

use smallvec::SmallVec;

use crate::token::{tag_name, tokens, TagShape, Token, TokenKind};

/// The whitelisted formatting tag kinds that participate in the tag stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// `<color=...>`
    Color,
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<size=...>`
    Size,
}

impl TagKind {
    /// Parses a tag name, case-insensitively. Non-whitelisted names yield
    /// `None` and are inert for stack purposes.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("color") {
            Some(Self::Color)
        } else if name.eq_ignore_ascii_case("b") {
            Some(Self::Bold)
        } else if name.eq_ignore_ascii_case("i") {
            Some(Self::Italic)
        } else if name.eq_ignore_ascii_case("size") {
            Some(Self::Size)
        } else {
            None
        }
    }

    /// The synthetic closing tag for this kind.
    pub fn closing_tag(self) -> &'static str {
        match self {
            Self::Color => "</color>",
            Self::Bold => "</b>",
            Self::Italic => "</i>",
            Self::Size => "</size>",
        }
    }
}

/// An ordered stack of the whitelisted tags currently open at some offset.
///
/// Used both to compute what must be reopened at a page boundary and what
/// must be closed to truncate safely mid-reveal. The invariant it maintains:
/// prepending [`TagStack::opening`] and appending [`TagStack::closing`]
/// around any slice whose scan produced this stack yields markup that is
/// tag-balanced for the whitelisted kinds.
#[derive(Clone, Debug, Default)]
pub struct TagStack<'a> {
    entries: SmallVec<[(TagKind, &'a str); 4]>,
}

impl<'a> TagStack<'a> {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stack of whitelisted tags open at byte `offset` of
    /// `text`, by replaying the scan from the start.
    ///
    /// A tag token that begins before `offset` is processed in full even if
    /// it extends past it; offsets produced by the projection and paginator
    /// always land on token boundaries, so this only matters for arbitrary
    /// caller-supplied offsets, which degrade gracefully rather than split a
    /// tag.
    pub fn at(text: &'a str, offset: usize) -> Self {
        let mut stack = Self::new();
        for token in tokens(text) {
            if token.start >= offset {
                break;
            }
            stack.observe(token);
        }
        stack
    }

    /// Feeds one scanned token to the stack.
    ///
    /// Opening a whitelisted tag pushes its raw text; a closing tag pops
    /// only when the stack top has the same kind. Mismatched closes and
    /// non-whitelisted tags are no-ops.
    pub fn observe(&mut self, token: Token<'a>) {
        match token.kind {
            TokenKind::Tag(TagShape::Open) => {
                if let Some(kind) = tag_name(token.text).and_then(TagKind::from_name) {
                    self.entries.push((kind, token.text));
                }
            }
            TokenKind::Tag(TagShape::Close) => {
                if let Some(kind) = tag_name(token.text).and_then(TagKind::from_name) {
                    if self.entries.last().is_some_and(|(top, _)| *top == kind) {
                        self.entries.pop();
                    }
                }
            }
            TokenKind::Tag(TagShape::SelfClosing) | TokenKind::Char => {}
        }
    }

    /// Whether no whitelisted tags are open.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of open whitelisted tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The raw opening tags, bottom-to-top: the order to prepend so that
    /// nesting is preserved.
    pub fn opening(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(_, raw)| *raw)
    }

    /// The synthetic closing tags, top-to-bottom: the order to append.
    pub fn closing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().rev().map(|(kind, _)| kind.closing_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn opening_at(text: &str, offset: usize) -> Vec<&str> {
        TagStack::at(text, offset).opening().collect()
    }

    fn closing_at(text: &str, offset: usize) -> Vec<&'static str> {
        TagStack::at(text, offset).closing().collect()
    }

    #[test]
    fn empty_at_start() {
        assert!(TagStack::at("<b>hi</b>", 0).is_empty());
    }

    #[test]
    fn open_span() {
        let text = "<color=red>Hello</color> World";
        assert_eq!(opening_at(text, 12), ["<color=red>"]);
        assert_eq!(closing_at(text, 12), ["</color>"]);
        // After the close, nothing is open.
        assert!(TagStack::at(text, 25).is_empty());
    }

    #[test]
    fn nested_order() {
        let text = "<color=red><b>x</b></color>";
        let stack = TagStack::at(text, 15);
        assert_eq!(stack.opening().collect::<Vec<_>>(), ["<color=red>", "<b>"]);
        assert_eq!(stack.closing().collect::<Vec<_>>(), ["</b>", "</color>"]);
    }

    #[test]
    fn mismatched_close_is_noop() {
        // `</i>` does not match the open `<b>`, so `<b>` stays open.
        assert_eq!(opening_at("<b>x</i>y", 9), ["<b>"]);
    }

    #[test]
    fn non_whitelisted_tags_are_inert() {
        assert!(TagStack::at("<quote>x", 8).is_empty());
        // ...and do not disturb the whitelisted stack around them.
        assert_eq!(opening_at("<b><quote>x", 11), ["<b>"]);
    }

    #[test]
    fn self_closing_is_inert() {
        assert!(TagStack::at("<br/>x", 6).is_empty());
    }

    #[test]
    fn case_insensitive_names() {
        assert_eq!(opening_at("<B>x", 4), ["<B>"]);
        assert_eq!(closing_at("<COLOR=red>x", 12), ["</color>"]);
    }

    #[test]
    fn close_pops_in_order() {
        let text = "<b><i>x</i>y";
        assert_eq!(opening_at(text, text.len()), ["<b>"]);
    }
}
