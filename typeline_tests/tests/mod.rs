// Copyright 2025 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `typeline`.
//!
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests. This makes it easy to share utility functions
//!   between test modules.
//! - If you want to add new tests, put them in the module matching their "topic"
//!   (pagination, reveal, ...) and put the topic at the start of the test name, so
//!   `pagination_empty_text` rather than `empty_text_pagination`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
