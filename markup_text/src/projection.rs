// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

use crate::token::{tokens, TokenKind};
use crate::visible::strip_tags;

/// A markup string paired with its tag-stripped projection.
///
/// The plain text is what a line-wrap oracle measures; offsets into it are
/// then mapped back into markup space with
/// [`map_plain_to_rich`](Self::map_plain_to_rich) so page slices can be cut
/// out of the original text, tags included.
///
/// Invariants: the plain text is never longer than the markup text, and
/// every visible character of the plain text corresponds to exactly one
/// character of the markup text at a well-defined offset.
#[derive(Clone, Debug)]
pub struct PlainProjection<'a> {
    rich: &'a str,
    plain: Cow<'a, str>,
}

impl<'a> PlainProjection<'a> {
    /// Projects `rich` onto its plain text.
    pub fn new(rich: &'a str) -> Self {
        Self {
            rich,
            plain: strip_tags(rich),
        }
    }

    /// The original markup text.
    pub fn rich(&self) -> &'a str {
        self.rich
    }

    /// The tag-stripped text.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Maps a byte offset in the plain text to the smallest byte offset in
    /// the markup text whose prefix projects to exactly that plain prefix.
    ///
    /// Implemented by replaying the scan: tag tokens advance only the rich
    /// cursor, visible characters advance both. The mapping is positional
    /// rather than content-verified, so it tolerates drift between the two
    /// strings without ever diverging on offsets; a consistency check runs
    /// in debug builds only.
    ///
    /// Offsets at or past the end of the plain text map to the end of the
    /// markup text. The mapping is monotone in `plain_offset`.
    pub fn map_plain_to_rich(&self, plain_offset: usize) -> usize {
        if plain_offset == 0 {
            return 0;
        }
        let mut plain_cursor = 0_usize;
        let mut rich_cursor = 0_usize;
        for token in tokens(self.rich) {
            if plain_cursor >= plain_offset {
                break;
            }
            if token.kind == TokenKind::Char {
                debug_assert_eq!(
                    self.plain.get(plain_cursor..plain_cursor + token.text.len()),
                    Some(token.text),
                    "plain projection out of sync with markup scan"
                );
                plain_cursor += token.text.len();
            }
            rich_cursor = token.end;
        }
        rich_cursor
    }
}
