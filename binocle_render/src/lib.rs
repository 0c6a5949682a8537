// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stereo-aware layer drawing.
//!
//! `binocle_render` turns the decisions recorded in
//! [`binocle_core`] into GPU calls. It talks to the GPU only through the
//! [`GpuContext`] trait, so any fixed-function style backend can host it.
//!
//! **[`compositor`]**: [`StereoCompositor`], which draws one layer or a
//! whole frame for the current output format.
//!
//! **[`gpu`]**: the [`GpuContext`] trait plus color-mask, blend and texture
//! environment values.
//!
//! **[`guard`]**: [`StereoGpuGuard`], which restores the color mask and
//! stencil test when a stereo draw ends.
//!
//! **[`texcoords`]**: quad texture coordinates and half selection.
//!
//! **[`region`]**: clip regions and the display-to-scissor conversion.
//!
//! **[`recording`]**: a [`GpuContext`] that records calls, for deferred
//! replay and for tests.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod compositor;
pub mod gpu;
pub mod guard;
pub mod recording;
pub mod region;
pub mod texcoords;

pub use compositor::StereoCompositor;
pub use gpu::GpuContext;
pub use guard::StereoGpuGuard;
pub use region::ClipRegion;
