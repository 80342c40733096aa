// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich-text pagination and typewriter reveal.
//!
//! Typeline takes a block of markup-annotated dialog text, wraps it to a
//! pixel width under a given style, splits it into pages of a fixed number
//! of lines while keeping formatting spans balanced across page cuts, and
//! exposes a monotonic reveal position so a caller can animate
//! character-by-character disclosure.
//!
//! Line measurement is an injected capability: the [`WrapLines`] trait is
//! implemented over whatever text-layout facility the embedding renderer
//! provides. [`FixedAdvanceWrap`] is a deterministic fixed-pitch
//! implementation suitable for tests and headless callers.
//!
//! The whole crate is single-threaded and synchronous; it is designed to be
//! called from a per-frame render callback. Pagination for a given input is
//! computed once and memoized in a [`LayoutCache`]; per frame, the caller
//! advances a [`RevealCursor`] and truncates the current page's rich text
//! to the revealed prefix.
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

pub use markup_text;

mod cache;
mod page;
mod reveal;
mod style;
mod wrap;

pub use cache::LayoutCache;
pub use page::{Page, build_pages};
pub use reveal::{DEFAULT_CHARS_PER_SECOND, RevealCursor, SeenPages};
pub use style::{FontId, TextStyle};
pub use wrap::{FixedAdvanceWrap, Line, WrapLines};
