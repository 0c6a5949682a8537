// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Layer mutations mark a channel in the store's
//! [`DirtyTracker`](understory_dirty::DirtyTracker). None of these channels
//! propagate: layers here have no parent/child relationship, so only the
//! explicitly marked layer appears in the drain output.
//!
//! Callers never query dirty state directly. Each
//! [`LayerStore::evaluate`](crate::layer::LayerStore::evaluate) call drains
//! all channels into [`LayerChanges`](crate::layer::LayerChanges).

use understory_dirty::Channel;

/// Stereo configuration changed; visible regions must be recomputed and a
/// transaction issued.
pub const STEREO: Channel = Channel::new(0);

/// The hardware-composer flags word changed.
pub const HW_FLAGS: Channel = Channel::new(1);

/// Alpha, opacity, blending, or bounds changed.
pub const APPEARANCE: Channel = Channel::new(2);

/// A layer was created or destroyed.
pub const LIFECYCLE: Channel = Channel::new(3);
