// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stereo vocabulary: how a source texture packs its views, which view comes
//! first, and which views a layer contributes.
//!
//! The numeric values returned by the `bits` methods are part of the
//! hardware-composer flags contract (see [`codec`](crate::codec)) and must not
//! be renumbered.

/// How a single source texture packs the left and right eye images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutType {
    /// Not stereoscopic; the whole texture is one view.
    #[default]
    Mono,
    /// Views packed horizontally, one per half of the texture width.
    SideBySide,
    /// Views packed vertically, one per half of the texture height.
    TopBottom,
    /// Views alternate by texture row.
    RowInterleaved,
    /// Views alternate by texture column.
    ColInterleaved,
}

impl LayoutType {
    /// All layout types, in wire order.
    pub const ALL: [Self; 5] = [
        Self::Mono,
        Self::SideBySide,
        Self::TopBottom,
        Self::RowInterleaved,
        Self::ColInterleaved,
    ];

    /// Returns the wire value of this layout type.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Mono => 0,
            Self::SideBySide => 1,
            Self::TopBottom => 2,
            Self::RowInterleaved => 3,
            Self::ColInterleaved => 4,
        }
    }

    /// Parses a wire value, returning `None` for unknown values.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Mono),
            1 => Some(Self::SideBySide),
            2 => Some(Self::TopBottom),
            3 => Some(Self::RowInterleaved),
            4 => Some(Self::ColInterleaved),
            _ => None,
        }
    }

    /// Returns `true` for every layout other than [`Mono`](Self::Mono).
    #[inline]
    #[must_use]
    pub const fn is_stereo(self) -> bool {
        !matches!(self, Self::Mono)
    }
}

/// Which half of a packed texture holds the left eye.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewOrder {
    /// The top/left half is the left eye.
    #[default]
    LeftFirst,
    /// The top/left half is the right eye.
    RightFirst,
}

impl ViewOrder {
    /// All view orders, in wire order.
    pub const ALL: [Self; 2] = [Self::LeftFirst, Self::RightFirst];

    /// Returns the wire value of this view order.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::LeftFirst => 0,
            Self::RightFirst => 1,
        }
    }

    /// Parses a wire value, returning `None` for unknown values.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::LeftFirst),
            1 => Some(Self::RightFirst),
            _ => None,
        }
    }
}

/// Whether a layer contributes both eyes or is pinned to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Draw both eyes using the pipeline's output format.
    #[default]
    Stereo,
    /// Always draw the left view.
    RenderLeft,
    /// Always draw the right view.
    RenderRight,
}

impl RenderMode {
    /// All render modes, in wire order.
    pub const ALL: [Self; 3] = [Self::Stereo, Self::RenderLeft, Self::RenderRight];

    /// Returns the wire value of this render mode.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Stereo => 0,
            Self::RenderLeft => 1,
            Self::RenderRight => 2,
        }
    }

    /// Parses a wire value, returning `None` for unknown values.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Stereo),
            1 => Some(Self::RenderLeft),
            2 => Some(Self::RenderRight),
            _ => None,
        }
    }

    /// The eye this mode pins the layer to, or `None` for [`Stereo`](Self::Stereo).
    #[must_use]
    pub const fn forced_eye(self) -> Option<Eye> {
        match self {
            Self::Stereo => None,
            Self::RenderLeft => Some(Eye::Left),
            Self::RenderRight => Some(Eye::Right),
        }
    }
}

/// One of the two views of a stereo pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Eye {
    /// The left view. Also the resting state between stereo draws.
    #[default]
    Left,
    /// The right view.
    Right,
}

impl Eye {
    /// Both eyes in drawing order.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// The single-eye render mode that selects this eye.
    #[must_use]
    pub const fn render_mode(self) -> RenderMode {
        match self {
            Self::Left => RenderMode::RenderLeft,
            Self::Right => RenderMode::RenderRight,
        }
    }
}
