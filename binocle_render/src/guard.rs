// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped stereo GPU state.

use core::ops::{Deref, DerefMut};

use crate::gpu::{ColorMask, GpuContext};

/// Borrows a [`GpuContext`] for stereo drawing.
///
/// While the guard is alive, callers may narrow the color mask and enable the
/// stencil test through it. Dropping the guard writes all color channels back
/// and disables the stencil test, on every exit path.
#[derive(Debug)]
pub struct StereoGpuGuard<'a, G: GpuContext + ?Sized> {
    gpu: &'a mut G,
}

impl<'a, G: GpuContext + ?Sized> StereoGpuGuard<'a, G> {
    /// Starts a stereo draw sequence on `gpu`.
    pub fn new(gpu: &'a mut G) -> Self {
        Self { gpu }
    }
}

impl<G: GpuContext + ?Sized> Deref for StereoGpuGuard<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.gpu
    }
}

impl<G: GpuContext + ?Sized> DerefMut for StereoGpuGuard<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.gpu
    }
}

impl<G: GpuContext + ?Sized> Drop for StereoGpuGuard<'_, G> {
    fn drop(&mut self) {
        self.gpu.set_color_mask(ColorMask::ALL);
        self.gpu.set_stencil_test(false);
    }
}
