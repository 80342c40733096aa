// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup Text is a Rust crate for working with dialog text that carries
//! inline formatting tags (for example `<color=red>`, `<b>`, `<i>`,
//! `<size=18>`) interleaved with visible characters.
//!
//! It provides a restartable token scanner over such text, visible-character
//! counting, tag-balanced prefix truncation (the building block of a
//! typewriter reveal), a projection onto the tag-stripped plain text with
//! offset mapping back into markup space, and reconstruction of the set of
//! formatting tags open at a given offset.
//!
//! Malformed markup never produces an error anywhere in this crate: an
//! unterminated `<` consumes the remainder of the string as a single
//! non-visible tag, and mismatched closing tags are structural no-ops.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod projection;
mod tag_stack;
mod token;
mod visible;

pub use crate::projection::PlainProjection;
pub use crate::tag_stack::{TagKind, TagStack};
pub use crate::token::{TagShape, Token, TokenKind, Tokens, tokens};
pub use crate::visible::{count_visible_chars, strip_tags, truncate_to_visible};
