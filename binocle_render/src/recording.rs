// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`GpuContext`] that records calls instead of executing them.
//!
//! Useful as a test double and for backends that replay the command list
//! later, e.g. on a dedicated GL thread.

use alloc::vec::Vec;

use binocle_core::output::ScissorRect;

use crate::gpu::{BlendFactor, ColorMask, GpuContext, TexEnv};
use crate::texcoords::TexCoords;

/// One recorded [`GpuContext`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GpuCommand {
    /// [`GpuContext::set_linear_filtering`].
    LinearFiltering,
    /// [`GpuContext::set_color_mask`].
    ColorMask(ColorMask),
    /// [`GpuContext::set_stencil_test`].
    StencilTest(bool),
    /// [`GpuContext::set_blend`].
    Blend(Option<BlendFactor>),
    /// [`GpuContext::set_color`].
    Color([f32; 4]),
    /// [`GpuContext::set_tex_env`].
    TexEnv(TexEnv),
    /// [`GpuContext::set_tex_coords`].
    TexCoords(TexCoords),
    /// [`GpuContext::set_scissor`].
    Scissor(ScissorRect),
    /// [`GpuContext::draw_quad`].
    DrawQuad,
}

/// The state in effect when a quad was drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRecord {
    /// Texture coordinates of the quad.
    pub tex_coords: TexCoords,
    /// Writable color channels.
    pub color_mask: ColorMask,
    /// Whether the stencil test was enabled.
    pub stencil_test: bool,
    /// Blend source factor, if blending was enabled.
    pub blend: Option<BlendFactor>,
    /// Scissor rectangle.
    pub scissor: ScissorRect,
}

/// Records every [`GpuContext`] call and tracks the resulting state.
#[derive(Clone, Debug)]
pub struct RecordingContext {
    commands: Vec<GpuCommand>,
    draws: Vec<DrawRecord>,
    current: DrawRecord,
    tex_coord_bytes: Vec<u8>,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    /// Creates a context in the GL default state: all channels writable,
    /// no stencil test, no blending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            draws: Vec::new(),
            current: DrawRecord {
                tex_coords: TexCoords::FULL,
                color_mask: ColorMask::ALL,
                stencil_test: false,
                blend: None,
                scissor: ScissorRect::default(),
            },
            tex_coord_bytes: TexCoords::FULL.as_bytes().to_vec(),
        }
    }

    /// Returns every call in order.
    #[must_use]
    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    /// Returns one record per [`draw_quad`](GpuContext::draw_quad) call.
    #[must_use]
    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    /// Returns the current color mask.
    #[must_use]
    pub fn color_mask(&self) -> ColorMask {
        self.current.color_mask
    }

    /// Returns whether the stencil test is currently enabled.
    #[must_use]
    pub fn stencil_test(&self) -> bool {
        self.current.stencil_test
    }

    /// Returns whether blending is currently enabled.
    #[must_use]
    pub fn blending(&self) -> bool {
        self.current.blend.is_some()
    }

    /// Returns the texture-coordinate buffer as a backend would upload it.
    #[must_use]
    pub fn tex_coord_bytes(&self) -> &[u8] {
        &self.tex_coord_bytes
    }

    /// Forgets recorded calls and draws, keeping the current state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.draws.clear();
    }
}

impl GpuContext for RecordingContext {
    fn set_linear_filtering(&mut self) {
        self.commands.push(GpuCommand::LinearFiltering);
    }

    fn set_color_mask(&mut self, mask: ColorMask) {
        self.current.color_mask = mask;
        self.commands.push(GpuCommand::ColorMask(mask));
    }

    fn set_stencil_test(&mut self, enabled: bool) {
        self.current.stencil_test = enabled;
        self.commands.push(GpuCommand::StencilTest(enabled));
    }

    fn set_blend(&mut self, src: Option<BlendFactor>) {
        self.current.blend = src;
        self.commands.push(GpuCommand::Blend(src));
    }

    fn set_color(&mut self, rgba: [f32; 4]) {
        self.commands.push(GpuCommand::Color(rgba));
    }

    fn set_tex_env(&mut self, env: TexEnv) {
        self.commands.push(GpuCommand::TexEnv(env));
    }

    fn set_tex_coords(&mut self, coords: &TexCoords) {
        self.current.tex_coords = *coords;
        self.tex_coord_bytes.clear();
        self.tex_coord_bytes.extend_from_slice(coords.as_bytes());
        self.commands.push(GpuCommand::TexCoords(*coords));
    }

    fn set_scissor(&mut self, rect: ScissorRect) {
        self.current.scissor = rect;
        self.commands.push(GpuCommand::Scissor(rect));
    }

    fn draw_quad(&mut self) {
        self.draws.push(self.current);
        self.commands.push(GpuCommand::DrawQuad);
    }
}
