// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip regions and their conversion to framebuffer scissors.

use alloc::vec::Vec;

use binocle_core::output::ScissorRect;
use kurbo::Rect;

/// The visible part of a layer: an ordered list of non-overlapping
/// rectangles in display coordinates (top-left origin).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipRegion {
    rects: Vec<Rect>,
}

impl ClipRegion {
    /// An empty region; drawing it emits no quads.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A region made of one rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rects: alloc::vec![rect],
        }
    }

    /// Appends a rectangle. The caller keeps the rectangles disjoint.
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Returns the rectangles in drawing order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Returns the number of rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns whether the region has no rectangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl FromIterator<Rect> for ClipRegion {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

/// Converts a display rectangle (top-left origin) into a scissor rectangle
/// with a bottom-left origin in a framebuffer `fb_height` pixels tall.
///
/// Edges are rounded to the nearest pixel.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "display coordinates fit in i32 after rounding"
)]
pub fn scissor_for(rect: Rect, fb_height: u32) -> ScissorRect {
    let r = rect.abs().round();
    // Float-to-int casts saturate; the integer math must too.
    let x = r.x0 as i32;
    let width = r.width() as i32;
    let height = r.height() as i32;
    let bottom = (r.y0 as i32).saturating_add(height);
    let fb_height = i32::try_from(fb_height).unwrap_or(i32::MAX);
    ScissorRect::new(x, fb_height.saturating_sub(bottom), width, height)
}
