// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with allocation and property management.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::LayerId;
use crate::codec;
use crate::config::StereoConfig;
use crate::dirty;
use crate::layout::{LayoutType, RenderMode, ViewOrder};
use crate::state::GlobalStereoState;
use crate::trace::{PageFlipEvent, PageFlipOutcome, Tracer};

/// Struct-of-arrays storage for all layers.
///
/// Layers are addressed by [`LayerId`] handles. Destroyed layers are recycled
/// via a free list, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct LayerStore {
    // -- Draw properties --
    pub(crate) bounds: Vec<Rect>,
    pub(crate) alpha: Vec<u8>,
    pub(crate) opaque: Vec<bool>,
    pub(crate) premultiplied: Vec<bool>,

    // -- Hardware composer view --
    pub(crate) hw_flags: Vec<u32>,

    // -- Stereo extension --
    pub(crate) stereo: Vec<Option<StereoConfig>>,
    pub(crate) sequence: Vec<u32>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    /// Creates an empty layer store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: Vec::new(),
            alpha: Vec::new(),
            opaque: Vec::new(),
            premultiplied: Vec::new(),
            hw_flags: Vec::new(),
            stereo: Vec::new(),
            sequence: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a plain layer without a stereo extension.
    ///
    /// The layer starts with empty bounds, full alpha, non-opaque,
    /// premultiplied content, and a zero flags word.
    pub fn create_layer(&mut self) -> LayerId {
        self.allocate(None)
    }

    /// Creates a layer carrying a stereo extension set to
    /// [`StereoConfig::MONO`].
    pub fn create_stereo_layer(&mut self) -> LayerId {
        self.allocate(Some(StereoConfig::MONO))
    }

    /// Destroys a layer, unregistering it from `state` and freeing its slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_layer(&mut self, id: LayerId, state: &mut GlobalStereoState) {
        self.validate(id);
        let idx = id.idx;

        state.remove_active_layer(id);
        self.stereo[idx as usize] = None;

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        self.free_list.push(idx);
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::LIFECYCLE);
    }

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns all live layers in slot order.
    #[must_use]
    pub fn layers(&self) -> Vec<LayerId> {
        (0..self.len)
            .filter(|idx| !self.free_list.contains(idx))
            .map(|idx| LayerId {
                idx,
                generation: self.generation[idx as usize],
            })
            .collect()
    }

    // -- Property getters --

    /// Returns the on-screen bounds of a layer, top-left origin.
    #[must_use]
    pub fn bounds(&self, id: LayerId) -> Rect {
        self.validate(id);
        self.bounds[id.idx as usize]
    }

    /// Returns the plane alpha of a layer (255 is fully opaque).
    #[must_use]
    pub fn alpha(&self, id: LayerId) -> u8 {
        self.validate(id);
        self.alpha[id.idx as usize]
    }

    /// Returns whether the layer's content is fully opaque.
    #[must_use]
    pub fn is_opaque(&self, id: LayerId) -> bool {
        self.validate(id);
        self.opaque[id.idx as usize]
    }

    /// Returns whether the layer's content has premultiplied alpha.
    #[must_use]
    pub fn is_premultiplied(&self, id: LayerId) -> bool {
        self.validate(id);
        self.premultiplied[id.idx as usize]
    }

    /// Returns the hardware-composer flags word of a layer.
    #[must_use]
    pub fn hw_flags(&self, id: LayerId) -> u32 {
        self.validate(id);
        self.hw_flags[id.idx as usize]
    }

    /// Returns the stereo configuration, or `None` for a plain layer.
    #[must_use]
    pub fn stereo_config(&self, id: LayerId) -> Option<StereoConfig> {
        self.validate(id);
        self.stereo[id.idx as usize]
    }

    /// Returns whether the layer carries a stereo extension.
    #[must_use]
    pub fn has_stereo(&self, id: LayerId) -> bool {
        self.stereo_config(id).is_some()
    }

    /// Returns whether the layer is composited as a stereo pair.
    #[must_use]
    pub fn is_stereo(&self, id: LayerId) -> bool {
        self.stereo_config(id).is_some_and(|config| config.is_stereo())
    }

    /// Returns the visibility sequence counter, bumped on every
    /// [`set_config`](Self::set_config).
    #[must_use]
    pub fn sequence(&self, id: LayerId) -> u32 {
        self.validate(id);
        self.sequence[id.idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the on-screen bounds of a layer.
    pub fn set_bounds(&mut self, id: LayerId, bounds: Rect) {
        self.validate(id);
        self.bounds[id.idx as usize] = bounds;
        self.dirty.mark(id.idx, dirty::APPEARANCE);
    }

    /// Sets the plane alpha of a layer.
    pub fn set_alpha(&mut self, id: LayerId, alpha: u8) {
        self.validate(id);
        self.alpha[id.idx as usize] = alpha;
        self.dirty.mark(id.idx, dirty::APPEARANCE);
    }

    /// Sets whether the layer's content is fully opaque.
    pub fn set_opaque(&mut self, id: LayerId, opaque: bool) {
        self.validate(id);
        self.opaque[id.idx as usize] = opaque;
        self.dirty.mark(id.idx, dirty::APPEARANCE);
    }

    /// Sets whether the layer's content has premultiplied alpha.
    pub fn set_premultiplied(&mut self, id: LayerId, premultiplied: bool) {
        self.validate(id);
        self.premultiplied[id.idx as usize] = premultiplied;
        self.dirty.mark(id.idx, dirty::APPEARANCE);
    }

    /// Stores the flags word as committed by the hardware composer.
    pub fn set_hw_flags(&mut self, id: LayerId, flags: u32) {
        self.validate(id);
        self.hw_flags[id.idx as usize] = flags;
        self.dirty.mark(id.idx, dirty::HW_FLAGS);
    }

    /// Overwrites the layer's stereo configuration.
    ///
    /// Always succeeds. A plain layer gains a stereo extension. The
    /// visibility sequence is bumped and the STEREO channel is marked, so the
    /// next [`evaluate`](Self::evaluate) reports the layer in
    /// [`LayerChanges::reconfigured`](super::LayerChanges::reconfigured).
    pub fn set_config(
        &mut self,
        id: LayerId,
        layout: LayoutType,
        view_order: ViewOrder,
        render_mode: RenderMode,
    ) {
        self.validate(id);
        let slot = id.idx as usize;
        self.stereo[slot] = Some(StereoConfig::new(layout, view_order, render_mode));
        self.sequence[slot] = self.sequence[slot].wrapping_add(1);
        self.dirty.mark(id.idx, dirty::STEREO);
    }

    /// Writes the stereo configuration into the layer's flags word before it
    /// is handed to the hardware composer. Plain layers are left alone.
    pub fn write_hw_flags(&mut self, id: LayerId) {
        self.validate(id);
        let slot = id.idx as usize;
        if let Some(config) = self.stereo[slot] {
            let flags = codec::apply(self.hw_flags[slot], &config);
            if flags != self.hw_flags[slot] {
                self.hw_flags[slot] = flags;
                self.dirty.mark(id.idx, dirty::HW_FLAGS);
            }
        }
    }

    /// Reads the stereo configuration back out of the flags word after the
    /// hardware composer committed its view of the layer.
    ///
    /// An unknown layout value leaves the configuration untouched. When the
    /// decoded layout differs from the previous one and is stereoscopic, the
    /// layer is registered in `state`. Reverting to mono does not unregister
    /// it; only [`destroy_layer`](Self::destroy_layer) does.
    pub fn on_page_flip(
        &mut self,
        id: LayerId,
        state: &mut GlobalStereoState,
        tracer: &mut Tracer<'_>,
    ) {
        self.validate(id);
        let slot = id.idx as usize;
        let Some(previous) = self.stereo[slot] else {
            return;
        };

        let outcome = match codec::decode(self.hw_flags[slot]) {
            Ok(config) => {
                self.stereo[slot] = Some(config);
                let activated = config.layout != previous.layout && config.is_stereo();
                if activated {
                    state.add_active_layer(id);
                }
                PageFlipOutcome::Applied { config, activated }
            }
            Err(err) => PageFlipOutcome::Rejected { bits: err.bits },
        };
        tracer.page_flip(&PageFlipEvent {
            layer_index: id.idx,
            outcome,
        });
    }

    // -- Internal helpers --

    fn allocate(&mut self, stereo: Option<StereoConfig>) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let slot = idx as usize;
            self.bounds[slot] = Rect::ZERO;
            self.alpha[slot] = u8::MAX;
            self.opaque[slot] = false;
            self.premultiplied[slot] = true;
            self.hw_flags[slot] = 0;
            self.stereo[slot] = stereo;
            self.sequence[slot] = 0;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.bounds.push(Rect::ZERO);
            self.alpha.push(u8::MAX);
            self.opaque.push(false);
            self.premultiplied.push(true);
            self.hw_flags.push(0);
            self.stereo.push(stereo);
            self.sequence.push(0);
            self.generation.push(0);
            idx
        };

        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::LIFECYCLE);

        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale LayerId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }
}
