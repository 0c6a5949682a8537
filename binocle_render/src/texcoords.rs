// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture coordinates of the layer quad and the half-selection rule.

use binocle_core::layout::LayoutType;
use bytemuck::{Pod, Zeroable};

/// One texture coordinate, normalized with a bottom-left origin.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TexCoord {
    /// Horizontal coordinate.
    pub u: f32,
    /// Vertical coordinate; 1.0 is the top of the texture.
    pub v: f32,
}

impl TexCoord {
    const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// Texture coordinates for the four fan vertices of a layer quad, in the
/// order top-left, bottom-left, bottom-right, top-right.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TexCoords(pub [TexCoord; 4]);

impl TexCoords {
    /// The whole texture.
    pub const FULL: Self = Self([
        TexCoord::new(0.0, 1.0),
        TexCoord::new(0.0, 0.0),
        TexCoord::new(1.0, 0.0),
        TexCoord::new(1.0, 1.0),
    ]);

    /// Coordinates sampling one half of a packed texture.
    ///
    /// `first_half` selects the top half for
    /// [`TopBottom`](LayoutType::TopBottom) and the left half for
    /// [`SideBySide`](LayoutType::SideBySide); otherwise the bottom or right
    /// half. Mono and interleaved layouts always sample the full texture,
    /// since interleaving is resolved by the stencil pattern.
    #[must_use]
    pub fn for_half(layout: LayoutType, first_half: bool) -> Self {
        let mut coords = Self::FULL;
        let [top_left, bottom_left, bottom_right, top_right] = &mut coords.0;
        match (layout, first_half) {
            (LayoutType::TopBottom, true) => {
                bottom_left.v = 0.5;
                bottom_right.v = 0.5;
            }
            (LayoutType::TopBottom, false) => {
                top_left.v = 0.5;
                top_right.v = 0.5;
            }
            (LayoutType::SideBySide, true) => {
                bottom_right.u = 0.5;
                top_right.u = 0.5;
            }
            (LayoutType::SideBySide, false) => {
                top_left.u = 0.5;
                bottom_left.u = 0.5;
            }
            (LayoutType::Mono | LayoutType::RowInterleaved | LayoutType::ColInterleaved, _) => {}
        }
        coords
    }

    /// Returns `(min, max)` of the horizontal coordinates.
    #[must_use]
    pub fn u_range(&self) -> (f32, f32) {
        range(self.0.iter().map(|c| c.u))
    }

    /// Returns `(min, max)` of the vertical coordinates.
    #[must_use]
    pub fn v_range(&self) -> (f32, f32) {
        range(self.0.iter().map(|c| c.v))
    }

    /// Returns the coordinates as bytes, ready for a vertex buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for TexCoords {
    fn default() -> Self {
        Self::FULL
    }
}

fn range(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_covers_unit_square() {
        assert_eq!(TexCoords::FULL.u_range(), (0.0, 1.0));
        assert_eq!(TexCoords::FULL.v_range(), (0.0, 1.0));
    }

    #[test]
    fn top_bottom_halves_partition_vertically() {
        let top = TexCoords::for_half(LayoutType::TopBottom, true);
        let bottom = TexCoords::for_half(LayoutType::TopBottom, false);

        assert_eq!(top.v_range(), (0.5, 1.0));
        assert_eq!(bottom.v_range(), (0.0, 0.5));
        assert_eq!(top.u_range(), (0.0, 1.0));
        assert_eq!(bottom.u_range(), (0.0, 1.0));
        // Shared edge, no gap and no overlap.
        assert_eq!(top.v_range().0, bottom.v_range().1);
    }

    #[test]
    fn side_by_side_halves_partition_horizontally() {
        let left = TexCoords::for_half(LayoutType::SideBySide, true);
        let right = TexCoords::for_half(LayoutType::SideBySide, false);

        assert_eq!(left.u_range(), (0.0, 0.5));
        assert_eq!(right.u_range(), (0.5, 1.0));
        assert_eq!(left.v_range(), (0.0, 1.0));
        assert_eq!(right.v_range(), (0.0, 1.0));
        assert_eq!(left.u_range().1, right.u_range().0);
    }

    #[test]
    fn interleaved_and_mono_sample_everything() {
        for layout in [
            LayoutType::Mono,
            LayoutType::RowInterleaved,
            LayoutType::ColInterleaved,
        ] {
            assert_eq!(TexCoords::for_half(layout, true), TexCoords::FULL);
            assert_eq!(TexCoords::for_half(layout, false), TexCoords::FULL);
        }
    }

    #[test]
    fn bytes_are_eight_floats() {
        assert_eq!(TexCoords::FULL.as_bytes().len(), 8 * 4);
    }
}
