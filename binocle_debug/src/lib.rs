// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines output for binocle diagnostics.
//!
//! This crate provides [`TraceSink`](binocle_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, for piping into
//!   log tooling.
//!
//! Both sinks ignore write errors, so a broken log pipe never fails a frame.

pub mod json;
pub mod pretty;

pub use json::JsonLinesSink;
pub use pretty::PrettyPrintSink;
