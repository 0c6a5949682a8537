// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stereo fields of the hardware-composer layer flags word.
//!
//! The hardware composer sees a layer's stereo configuration as three small
//! integers packed into disjoint bit ranges of the layer's `u32` flags word.
//! The rest of the word belongs to unrelated layer attributes and is never
//! touched here.
//!
//! ```text
//!  31          24 23  22 21  20 19      16 15                 0
//! ┌──────────────┬──────┬──────┬──────────┬────────────────────┐
//! │   (other)    │ mode │order │  layout  │      (other)       │
//! └──────────────┴──────┴──────┴──────────┴────────────────────┘
//! ```
//!
//! Decoding is asymmetric: an unknown layout value rejects the
//! whole word with [`InvalidLayout`], while unknown view-order or render-mode
//! values fall back to [`ViewOrder::LeftFirst`] and [`RenderMode::Stereo`].

use core::fmt;

use crate::config::StereoConfig;
use crate::layout::{LayoutType, RenderMode, ViewOrder};

/// Version of the bit layout described in this module.
pub const FLAGS_LAYOUT_VERSION: u8 = 1;

/// Bit offset of the layout-type field.
pub const LAYOUT_TYPE_SHIFT: u32 = 16;
/// Mask of the layout-type field, in place.
pub const LAYOUT_TYPE_MASK: u32 = 0xF << LAYOUT_TYPE_SHIFT;

/// Bit offset of the view-order field.
pub const VIEW_ORDER_SHIFT: u32 = 20;
/// Mask of the view-order field, in place.
pub const VIEW_ORDER_MASK: u32 = 0x3 << VIEW_ORDER_SHIFT;

/// Bit offset of the render-mode field.
pub const RENDER_MODE_SHIFT: u32 = 22;
/// Mask of the render-mode field, in place.
pub const RENDER_MODE_MASK: u32 = 0x3 << RENDER_MODE_SHIFT;

/// Union of all bits owned by the stereo fields.
pub const STEREO_MASK: u32 = LAYOUT_TYPE_MASK | VIEW_ORDER_MASK | RENDER_MODE_MASK;

/// The layout-type field of a flags word held an unknown value.
///
/// Callers must keep their previous configuration when they see this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidLayout {
    /// The raw (unshifted) layout-type field.
    pub bits: u32,
}

impl fmt::Display for InvalidLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stereo layout type {}", self.bits)
    }
}

impl core::error::Error for InvalidLayout {}

/// Encodes `config` into its three bit ranges.
///
/// The result has no bits outside [`STEREO_MASK`] and is meant to be OR'd
/// into a word whose stereo ranges were cleared first (see [`apply`]).
#[must_use]
pub const fn encode(config: &StereoConfig) -> u32 {
    (config.layout.bits() << LAYOUT_TYPE_SHIFT)
        | (config.view_order.bits() << VIEW_ORDER_SHIFT)
        | (config.render_mode.bits() << RENDER_MODE_SHIFT)
}

/// Replaces the stereo ranges of `flags` with `config`, keeping every other bit.
#[must_use]
pub const fn apply(flags: u32, config: &StereoConfig) -> u32 {
    (flags & !STEREO_MASK) | encode(config)
}

/// Decodes the stereo ranges of `flags`.
///
/// # Errors
///
/// Returns [`InvalidLayout`] if the layout-type range holds an unknown value.
pub fn decode(flags: u32) -> Result<StereoConfig, InvalidLayout> {
    let layout_bits = (flags & LAYOUT_TYPE_MASK) >> LAYOUT_TYPE_SHIFT;
    let layout = LayoutType::from_bits(layout_bits).ok_or(InvalidLayout { bits: layout_bits })?;
    let view_order = ViewOrder::from_bits((flags & VIEW_ORDER_MASK) >> VIEW_ORDER_SHIFT)
        .unwrap_or(ViewOrder::LeftFirst);
    let render_mode = RenderMode::from_bits((flags & RENDER_MODE_MASK) >> RENDER_MODE_SHIFT)
        .unwrap_or(RenderMode::Stereo);
    Ok(StereoConfig {
        layout,
        view_order,
        render_mode,
    })
}
