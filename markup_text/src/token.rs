// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a tag token relates to the tag stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagShape {
    /// An opening tag such as `<b>` or `<color=red>`.
    Open,
    /// A closing tag such as `</b>`.
    Close,
    /// A self-closing tag such as `<br/>`.
    SelfClosing,
}

/// The kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A single visible character.
    Char,
    /// A complete tag span, `<` through the matching `>`.
    Tag(TagShape),
}

/// One token produced by [`tokens`].
///
/// `start..end` is the byte span of [`Token::text`] within the scanned
/// string. Char tokens span exactly one `char`; tag tokens span from `<`
/// through the matching `>` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What this token is.
    pub kind: TokenKind,
    /// The token's text, a slice of the scanned string.
    pub text: &'a str,
    /// Start byte offset within the scanned string.
    pub start: usize,
    /// End byte offset (exclusive) within the scanned string.
    pub end: usize,
}

/// Scans `text` into a lazy sequence of [`Token`]s.
///
/// The scanner is single-pass and restartable; callers that need to walk the
/// same text more than once simply scan again rather than persisting a token
/// list, which keeps memory flat for long dialog texts.
///
/// Policy for malformed markup: a `<` with no `>` before end-of-string yields
/// one tag token spanning the remainder of the string. It counts as
/// non-visible, exactly like a terminated tag. This must not be treated as
/// visible text and must not fail.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Iterator over the tokens of a markup string. See [`tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let start = self.pos;

        if first == '<' {
            let end = match rest.find('>') {
                Some(gt) => start + gt + 1,
                // Unterminated tag: consume to end-of-string.
                None => self.text.len(),
            };
            let text = &self.text[start..end];
            self.pos = end;
            return Some(Token {
                kind: TokenKind::Tag(classify_tag(text)),
                text,
                start,
                end,
            });
        }

        let end = start + first.len_utf8();
        let text = &self.text[start..end];
        self.pos = end;
        Some(Token {
            kind: TokenKind::Char,
            text,
            start,
            end,
        })
    }
}

fn classify_tag(tag: &str) -> TagShape {
    // `tag` is `<`, an optional body, and an optional trailing `>`.
    let body = tag.strip_prefix('<').unwrap_or(tag);
    let body = body.strip_suffix('>').unwrap_or(body);
    if body.starts_with('/') {
        TagShape::Close
    } else if body.ends_with('/') && !body.is_empty() {
        TagShape::SelfClosing
    } else {
        TagShape::Open
    }
}

/// Returns the name of a tag token, or `None` for a token whose body has
/// no name (for example `<>`).
///
/// The name runs from just after `<` (skipping a leading `/` for closing
/// tags) up to the first `=`, space, `/` or `>`.
pub(crate) fn tag_name(tag: &str) -> Option<&str> {
    let body = tag.strip_prefix('<')?;
    let body = body.strip_suffix('>').unwrap_or(body);
    let body = body.strip_prefix('/').unwrap_or(body).trim_start();
    let end = body
        .find(|c: char| c == '=' || c == ' ' || c == '/' || c == '>')
        .unwrap_or(body.len());
    let name = &body[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
