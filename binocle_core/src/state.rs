// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pipeline-wide stereo state.
//!
//! One [`GlobalStereoState`] exists per display pipeline and is passed by
//! reference into every composition call. It records the output format for
//! the whole frame, the eye currently being drawn, and which layers are
//! stereoscopic.
//!
//! The current eye rests at [`Eye::Left`]. Code that draws the right eye
//! acquires an [`EyePass`], which puts the state back to `Left` when it goes
//! out of scope, including on early return or unwind.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::layer::LayerId;
use crate::layout::Eye;
use crate::output::{FramebufferSize, OutputFormat, OutputId, PackingArrangement, ScissorRect};

/// Construction-time settings for a [`GlobalStereoState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Output this pipeline drives.
    pub output: OutputId,
    /// Initial output format.
    pub format: OutputFormat,
    /// Framebuffer size in pixels.
    pub framebuffer: FramebufferSize,
    /// Eye placement used when `format` is [`OutputFormat::FramePacking`].
    pub packing: PackingArrangement,
}

impl PipelineConfig {
    /// A pipeline with the given framebuffer size and no stereo output.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            output: OutputId(0),
            format: OutputFormat::Default,
            framebuffer: FramebufferSize { width, height },
            packing: PackingArrangement::SideBySide,
        }
    }

    /// A frame-packed pipeline with the left eye above the right, as used by
    /// HDMI 1.4 3D frame packing.
    #[must_use]
    pub const fn hdmi_frame_packing(width: u32, height: u32) -> Self {
        Self::new(width, height)
            .with_format(OutputFormat::FramePacking)
            .with_packing(PackingArrangement::TopBottom)
    }

    /// Returns this configuration with a different output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns this configuration with a different frame-packing arrangement.
    #[must_use]
    pub const fn with_packing(mut self, packing: PackingArrangement) -> Self {
        self.packing = packing;
        self
    }

    /// Returns this configuration bound to a different output.
    #[must_use]
    pub const fn with_output(mut self, output: OutputId) -> Self {
        self.output = output;
        self
    }
}

/// Stereo state shared by every layer composited on one display pipeline.
///
/// Not synchronized: the compositor's single composition pass is the only
/// writer.
#[derive(Clone, Debug)]
pub struct GlobalStereoState {
    config: PipelineConfig,
    current_eye: Eye,
    active_layers: Vec<LayerId>,
}

impl GlobalStereoState {
    /// Creates the state for a pipeline.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            current_eye: Eye::Left,
            active_layers: Vec::new(),
        }
    }

    /// Returns the configuration the state was built with, including the
    /// current output format.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the output this state belongs to.
    #[must_use]
    pub const fn output(&self) -> OutputId {
        self.config.output
    }

    /// Returns the current output format.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.config.format
    }

    /// Switches the output format used from the next draw on.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.config.format = format;
    }

    /// Returns the framebuffer size.
    #[must_use]
    pub const fn framebuffer(&self) -> FramebufferSize {
        self.config.framebuffer
    }

    // -- Active layer registry --

    /// Records `id` as a stereoscopic layer. Adding twice is a no-op.
    pub fn add_active_layer(&mut self, id: LayerId) {
        if !self.active_layers.contains(&id) {
            self.active_layers.push(id);
        }
    }

    /// Forgets `id`. Removing an absent layer is a no-op.
    pub fn remove_active_layer(&mut self, id: LayerId) {
        self.active_layers.retain(|&active| active != id);
    }

    /// Returns whether `id` is registered as stereoscopic.
    #[must_use]
    pub fn is_active_layer(&self, id: LayerId) -> bool {
        self.active_layers.contains(&id)
    }

    /// Returns the registered stereoscopic layers in registration order.
    #[must_use]
    pub fn active_layers(&self) -> &[LayerId] {
        &self.active_layers
    }

    // -- Output format predicates --

    /// Output format is [`OutputFormat::Default`].
    #[inline]
    #[must_use]
    pub fn is_default_render(&self) -> bool {
        self.config.format == OutputFormat::Default
    }

    /// Output format is [`OutputFormat::FramePacking`].
    #[inline]
    #[must_use]
    pub fn is_frame_packing_render(&self) -> bool {
        self.config.format == OutputFormat::FramePacking
    }

    /// Output format is [`OutputFormat::Interleave`].
    #[inline]
    #[must_use]
    pub fn is_interleave_render(&self) -> bool {
        self.config.format == OutputFormat::Interleave
    }

    /// Output format is [`OutputFormat::Anaglyph`].
    #[inline]
    #[must_use]
    pub fn is_anaglyph_render(&self) -> bool {
        self.config.format == OutputFormat::Anaglyph
    }

    /// Output format is [`OutputFormat::Mono`].
    #[inline]
    #[must_use]
    pub fn is_mono_render(&self) -> bool {
        self.config.format == OutputFormat::Mono
    }

    // -- Draw state --

    /// Returns the eye currently being drawn.
    #[must_use]
    pub const fn current_eye(&self) -> Eye {
        self.current_eye
    }

    /// Returns whether the left eye is being drawn.
    #[must_use]
    pub fn is_drawing_left(&self) -> bool {
        self.current_eye == Eye::Left
    }

    /// Sets the eye being drawn.
    ///
    /// Prefer [`eye_pass`](Self::eye_pass), which restores `Left` on scope exit.
    pub fn set_draw_state(&mut self, eye: Eye) {
        self.current_eye = eye;
    }

    /// Puts the draw state back to its resting value before a frame begins.
    pub fn begin_frame(&mut self) {
        self.current_eye = Eye::Left;
    }

    /// Switches to `eye` until the returned guard is dropped, then back to
    /// [`Eye::Left`].
    #[must_use = "the eye is reset as soon as the pass is dropped"]
    pub fn eye_pass(&mut self, eye: Eye) -> EyePass<'_> {
        self.set_draw_state(eye);
        EyePass { state: self }
    }

    /// Maps a framebuffer scissor rectangle into the region owned by the
    /// current eye.
    ///
    /// Only frame-packed output moves anything: each eye is squeezed into its
    /// half of the framebuffer. Every other format returns `rect` unchanged.
    #[must_use]
    pub fn modify_coords(&self, rect: ScissorRect) -> ScissorRect {
        if !self.is_frame_packing_render() {
            return rect;
        }
        let FramebufferSize { width, height } = self.config.framebuffer;
        match self.config.packing {
            PackingArrangement::SideBySide => {
                let offset = match self.current_eye {
                    Eye::Left => 0,
                    Eye::Right => (width / 2) as i32,
                };
                ScissorRect {
                    x: rect.x / 2 + offset,
                    width: rect.width / 2,
                    ..rect
                }
            }
            PackingArrangement::TopBottom => {
                // Bottom-left origin: the left eye owns the upper half.
                let offset = match self.current_eye {
                    Eye::Left => (height / 2) as i32,
                    Eye::Right => 0,
                };
                ScissorRect {
                    y: rect.y / 2 + offset,
                    height: rect.height / 2,
                    ..rect
                }
            }
        }
    }
}

/// A scoped switch of [`GlobalStereoState`] to one eye.
///
/// Dereferences to the state so draws inside the pass can read it. Dropping
/// the pass restores [`Eye::Left`].
#[derive(Debug)]
pub struct EyePass<'a> {
    state: &'a mut GlobalStereoState,
}

impl Deref for EyePass<'_> {
    type Target = GlobalStereoState;

    fn deref(&self) -> &GlobalStereoState {
        self.state
    }
}

impl DerefMut for EyePass<'_> {
    fn deref_mut(&mut self) -> &mut GlobalStereoState {
        self.state
    }
}

impl Drop for EyePass<'_> {
    fn drop(&mut self) {
        self.state.set_draw_state(Eye::Left);
    }
}
