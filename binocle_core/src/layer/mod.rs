// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer storage with an optional stereo extension per layer.
//!
//! A *layer* here is the part of a compositor surface the stereo path needs:
//!
//! - An identity ([`LayerId`]), a generational handle that becomes stale when
//!   the layer is destroyed.
//! - Ordinary draw properties: [`bounds`](LayerStore::set_bounds),
//!   [`alpha`](LayerStore::set_alpha), [`opaque`](LayerStore::set_opaque),
//!   and [`premultiplied`](LayerStore::set_premultiplied).
//! - The hardware-composer [`flags word`](LayerStore::hw_flags).
//! - An optional [`StereoConfig`](crate::config::StereoConfig). Plain layers
//!   have none and are never stereoscopic; stereo-capable layers are created
//!   with [`create_stereo_layer`](LayerStore::create_stereo_layer) or gain the
//!   extension on their first [`set_config`](LayerStore::set_config).
//!
//! # Page flips
//!
//! Once per displayed frame the host calls
//! [`on_page_flip`](LayerStore::on_page_flip), which reads the stereo fields
//! back out of the flags word. An unknown layout value is ignored and the
//! previous configuration stays in place. A layer that becomes stereoscopic
//! registers itself in [`GlobalStereoState`](crate::state::GlobalStereoState);
//! it is only unregistered when destroyed.

mod changes;
mod id;
mod store;

pub use changes::LayerChanges;
pub use id::LayerId;
pub use store::LayerStore;
