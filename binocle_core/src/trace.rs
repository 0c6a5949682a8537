// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for stereo composition.
//!
//! This module provides a [`TraceSink`] trait with one method per event. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.

use crate::config::StereoConfig;
use crate::layout::Eye;
use crate::output::{OutputFormat, OutputId};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Result of reading a layer's flags word back after a page flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFlipOutcome {
    /// The layout field held an unknown value; the previous configuration
    /// was kept.
    Rejected {
        /// The raw layout-type field.
        bits: u32,
    },
    /// The decoded configuration replaced the previous one.
    Applied {
        /// The configuration now in effect.
        config: StereoConfig,
        /// Whether the layer was registered as stereoscopic by this flip.
        activated: bool,
    },
}

/// Which branch of the layer draw was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawPath {
    /// Ordinary single-pass draw of the whole texture.
    Bypass,
    /// One stereo-aware draw of a single eye.
    SingleEye(Eye),
    /// Left eye then right eye from the same layer call.
    DualEye,
}

impl DrawPath {
    /// Short lowercase name, used by trace sinks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bypass => "bypass",
            Self::SingleEye(Eye::Left) => "left",
            Self::SingleEye(Eye::Right) => "right",
            Self::DualEye => "dual",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a layer's flags word is read back.
#[derive(Clone, Copy, Debug)]
pub struct PageFlipEvent {
    /// Slot index of the layer.
    pub layer_index: u32,
    /// What happened to the configuration.
    pub outcome: PageFlipOutcome,
}

/// Emitted after a layer has been drawn.
#[derive(Clone, Copy, Debug)]
pub struct LayerDrawEvent {
    /// Slot index of the layer.
    pub layer_index: u32,
    /// Output being composed.
    pub output: OutputId,
    /// Output format at draw time.
    pub format: OutputFormat,
    /// Branch taken.
    pub path: DrawPath,
    /// Number of textured passes over the clip region.
    pub passes: u8,
    /// Number of clip rectangles per pass.
    pub rects: u32,
}

/// Emitted after every layer of a frame has been drawn.
#[derive(Clone, Copy, Debug)]
pub struct FrameComposedEvent {
    /// Output being composed.
    pub output: OutputId,
    /// Output format of the frame.
    pub format: OutputFormat,
    /// Number of layers drawn per eye pass.
    pub layers: u32,
    /// Number of full passes over the layer list.
    pub eye_passes: u8,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from stereo composition.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called after a page flip read back a layer's flags.
    fn on_page_flip(&mut self, e: &PageFlipEvent) {
        _ = e;
    }

    /// Called after a layer is drawn.
    fn on_layer_draw(&mut self, e: &LayerDrawEvent) {
        _ = e;
    }

    /// Called after a frame is composed.
    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PageFlipEvent`].
    #[inline]
    pub fn page_flip(&mut self, e: &PageFlipEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page_flip(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerDrawEvent`].
    #[inline]
    pub fn layer_draw(&mut self, e: &LayerDrawEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_draw(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameComposedEvent`].
    #[inline]
    pub fn frame_composed(&mut self, e: &FrameComposedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_composed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
