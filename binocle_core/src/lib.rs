// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stereoscopic layer configuration and pipeline state for compositors.
//!
//! `binocle_core` holds everything a compositor needs to decide how a layer
//! carrying packed stereo content takes part in a frame, without touching the
//! GPU. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   LayerStore::set_config ──► StereoConfig ──► LayerStore::write_hw_flags
//!                                                       │ codec::apply
//!                                                       ▼
//!                                            hardware composer flags
//!                                                       │ codec::decode
//!                                                       ▼
//!   GlobalStereoState ◄── register ── LayerStore::on_page_flip
//!          │
//!          ▼
//!   binocle_render::StereoCompositor (draws each layer)
//! ```
//!
//! **[`layout`]**: layout type, view order, render mode, and eye.
//!
//! **[`config`]**: [`StereoConfig`](config::StereoConfig), the per-layer
//! extension, and its derived predicates.
//!
//! **[`codec`]**: encode/decode of the stereo fields of the hardware-composer
//! flags word.
//!
//! **[`state`]**: [`GlobalStereoState`](state::GlobalStereoState), the
//! per-pipeline output format, current eye, and active-layer registry.
//!
//! **[`layer`]**: generational layer store hosting the optional stereo
//! extension, plus the page-flip and configuration entry points.
//!
//! **[`dirty`]**: dirty channels drained by
//! [`LayerStore::evaluate`](layer::LayerStore::evaluate).
//!
//! **[`output`]**: output identity, output formats, and scissor rectangles.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod codec;
pub mod config;
pub mod dirty;
pub mod layer;
pub mod layout;
pub mod output;
pub mod state;
pub mod trace;
