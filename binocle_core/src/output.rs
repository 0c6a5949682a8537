// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display output identification and stereo presentation formats.

use core::fmt;

/// Identifies a specific display output or surface.
///
/// Hosts assign output IDs to distinguish display pipelines. Core code
/// passes them through to trace events without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OutputId(pub u32);

impl fmt::Debug for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputId({})", self.0)
    }
}

/// How a display pipeline presents stereo content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// No stereo handling; every layer takes the ordinary draw path.
    #[default]
    Default,
    /// Both eyes share one frame in non-overlapping viewport regions.
    FramePacking,
    /// Eyes alternate by output row or column, selected with the stencil buffer.
    Interleave,
    /// Left eye in red, right eye in green and blue.
    Anaglyph,
    /// A single eye is shown on a 2D display.
    Mono,
}

impl OutputFormat {
    /// Short lowercase name, used by trace sinks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FramePacking => "frame-packing",
            Self::Interleave => "interleave",
            Self::Anaglyph => "anaglyph",
            Self::Mono => "mono",
        }
    }
}

/// Where each eye lands in a frame-packed framebuffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PackingArrangement {
    /// Left eye in the left half, right eye in the right half.
    #[default]
    SideBySide,
    /// Left eye in the top half, right eye in the bottom half.
    TopBottom,
}

/// Framebuffer dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FramebufferSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A scissor rectangle in framebuffer pixels with a bottom-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScissorRect {
    /// Left edge.
    pub x: i32,
    /// Bottom edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl ScissorRect {
    /// Creates a scissor rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
