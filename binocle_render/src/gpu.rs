// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-function GPU surface the compositor drives.

use binocle_core::output::ScissorRect;

use crate::texcoords::TexCoords;

/// Which color channels a draw may write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorMask {
    /// Red channel.
    pub red: bool,
    /// Green channel.
    pub green: bool,
    /// Blue channel.
    pub blue: bool,
    /// Alpha channel.
    pub alpha: bool,
}

impl ColorMask {
    /// Every channel writable.
    pub const ALL: Self = Self::new(true, true, true, true);

    /// Red and alpha only; the left eye of an anaglyph.
    pub const RED_ALPHA: Self = Self::new(true, false, false, true);

    /// Green, blue, and alpha; the right (cyan) eye of an anaglyph.
    pub const CYAN_ALPHA: Self = Self::new(false, true, true, true);

    /// Creates a mask from per-channel flags.
    #[must_use]
    pub const fn new(red: bool, green: bool, blue: bool, alpha: bool) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for ColorMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Source factor of the `(src, 1 - src_alpha)` blend equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// For premultiplied content.
    One,
    /// For straight-alpha content.
    SrcAlpha,
}

/// How the sampled texel combines with the vertex color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TexEnv {
    /// Texel replaces the vertex color.
    #[default]
    Replace,
    /// Texel is multiplied by the vertex color.
    Modulate,
}

/// A GPU context with fixed-function state, as exposed by GLES 1.x style
/// renderers.
///
/// Implementations apply each call immediately. The compositor assumes the
/// stencil buffer has already been filled with the interleave pattern when
/// the output format needs one.
pub trait GpuContext {
    /// Switches texture minification and magnification to linear filtering.
    fn set_linear_filtering(&mut self);

    /// Restricts which color channels subsequent draws write.
    fn set_color_mask(&mut self, mask: ColorMask);

    /// Enables or disables the stencil test.
    fn set_stencil_test(&mut self, enabled: bool);

    /// Enables blending with the given source factor, or disables it.
    fn set_blend(&mut self, src: Option<BlendFactor>);

    /// Sets the vertex color, RGBA.
    fn set_color(&mut self, rgba: [f32; 4]);

    /// Sets the texture environment mode.
    fn set_tex_env(&mut self, env: TexEnv);

    /// Sets the texture coordinates of the layer quad.
    ///
    /// Buffer-based backends can upload [`TexCoords::as_bytes`] directly.
    fn set_tex_coords(&mut self, coords: &TexCoords);

    /// Sets the scissor rectangle (framebuffer pixels, bottom-left origin).
    fn set_scissor(&mut self, rect: ScissorRect);

    /// Draws the layer quad as a four-vertex triangle fan.
    fn draw_quad(&mut self);
}
