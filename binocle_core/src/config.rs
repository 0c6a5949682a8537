// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer stereo configuration.

use crate::layout::{Eye, LayoutType, RenderMode, ViewOrder};

/// The stereo extension of a single layer.
///
/// Created as `{Mono, LeftFirst, Stereo}` and owned by exactly one layer.
/// A [`Mono`](LayoutType::Mono) layout makes the layer non-stereoscopic no
/// matter what [`render_mode`](Self::render_mode) says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StereoConfig {
    /// How the layer's texture packs its views.
    pub layout: LayoutType,
    /// Which half of the texture is the left eye.
    pub view_order: ViewOrder,
    /// Which views the layer contributes.
    pub render_mode: RenderMode,
}

impl StereoConfig {
    /// The configuration every new stereo-capable layer starts with.
    pub const MONO: Self = Self {
        layout: LayoutType::Mono,
        view_order: ViewOrder::LeftFirst,
        render_mode: RenderMode::Stereo,
    };

    /// Creates a configuration from its three parts.
    #[must_use]
    pub const fn new(layout: LayoutType, view_order: ViewOrder, render_mode: RenderMode) -> Self {
        Self {
            layout,
            view_order,
            render_mode,
        }
    }

    /// Returns whether the layer should be composited as a stereo pair.
    #[inline]
    #[must_use]
    pub const fn is_stereo(&self) -> bool {
        self.layout.is_stereo()
    }

    /// Returns whether drawing `eye` samples the top/left half of the
    /// texture rather than the bottom/right one.
    #[must_use]
    pub fn is_drawing_first_half(&self, eye: Eye) -> bool {
        (self.view_order == ViewOrder::LeftFirst) == (eye == Eye::Left)
    }

    /// The eye this layer is pinned to, if it is stereoscopic and not in
    /// [`Stereo`](RenderMode::Stereo) mode.
    #[must_use]
    pub fn forced_eye(&self) -> Option<Eye> {
        if self.is_stereo() {
            self.render_mode.forced_eye()
        } else {
            None
        }
    }
}
