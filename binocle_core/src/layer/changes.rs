// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draining dirty channels into per-frame change lists.
//!
//! [`LayerChanges`] uses raw slot indices (`u32`) rather than
//! [`LayerId`](super::LayerId) handles, mirroring the store's internal
//! layout. Removed layers may still appear in other lists for the frame in
//! which they were destroyed.

use alloc::vec::Vec;

use super::store::LayerStore;
use crate::dirty;

/// The set of changes produced by a single [`LayerStore::evaluate`] call.
#[derive(Clone, Debug, Default)]
pub struct LayerChanges {
    /// Layers whose stereo configuration was set. The host must recompute
    /// visible regions and issue a transaction for these.
    pub reconfigured: Vec<u32>,
    /// Layers whose hardware-composer flags word changed.
    pub hw_flags: Vec<u32>,
    /// Layers whose bounds, alpha, opacity, or blending changed.
    pub appearance: Vec<u32>,
    /// Layers added since the last evaluate.
    pub added: Vec<u32>,
    /// Layers removed since the last evaluate.
    pub removed: Vec<u32>,
}

impl LayerChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.reconfigured.clear();
        self.hw_flags.clear();
        self.appearance.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Returns whether anything requires the host to recompute visible
    /// regions and re-transact.
    #[must_use]
    pub fn needs_transaction(&self) -> bool {
        !self.reconfigured.is_empty() || !self.added.is_empty() || !self.removed.is_empty()
    }
}

impl LayerStore {
    /// Drains all dirty channels and returns the set of changes.
    pub fn evaluate(&mut self) -> LayerChanges {
        let mut changes = LayerChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer.
    pub fn evaluate_into(&mut self, changes: &mut LayerChanges) {
        changes.clear();

        changes.reconfigured.extend(
            self.dirty
                .drain(dirty::STEREO)
                .affected()
                .deterministic()
                .run(),
        );
        changes.hw_flags.extend(
            self.dirty
                .drain(dirty::HW_FLAGS)
                .affected()
                .deterministic()
                .run(),
        );
        changes.appearance.extend(
            self.dirty
                .drain(dirty::APPEARANCE)
                .affected()
                .deterministic()
                .run(),
        );

        // Lifecycle is reported from the pending lists, which keep
        // create/destroy order; the channel only needs draining.
        self.dirty
            .drain(dirty::LIFECYCLE)
            .affected()
            .deterministic()
            .run()
            .for_each(drop);
        changes.added.append(&mut self.pending_added);
        changes.removed.append(&mut self.pending_removed);
    }
}
