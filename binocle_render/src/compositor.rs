// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer stereo draw sequencing.
//!
//! [`StereoCompositor::draw_layer`] decides, for one layer and one clip
//! region, whether the layer takes the ordinary single-pass path or the
//! stereo path, which half of the packed texture each pass samples, and
//! which color-mask or stencil state brackets the passes.
//!
//! The decision table, by output format, for a stereoscopic layer:
//!
//! | Output        | `Stereo` mode                 | Forced eye            |
//! |---------------|-------------------------------|-----------------------|
//! | Default       | bypass                        | bypass                |
//! | Frame packing | current eye, one pass         | forced eye, one pass  |
//! | Mono          | current eye, one pass         | forced eye, one pass  |
//! | Interleave    | stencil on, left then right   | current eye, one pass |
//! | Anaglyph      | red then cyan                 | current eye, one pass |
//!
//! Plain layers bypass unless the output is frame-packed, where they are
//! squeezed into the current eye's half of the framebuffer.

use alloc::vec::Vec;

use binocle_core::config::StereoConfig;
use binocle_core::layer::{LayerId, LayerStore};
use binocle_core::layout::{Eye, RenderMode};
use binocle_core::output::ScissorRect;
use binocle_core::state::GlobalStereoState;
use binocle_core::trace::{DrawPath, FrameComposedEvent, LayerDrawEvent, Tracer};

use crate::gpu::{BlendFactor, ColorMask, GpuContext, TexEnv};
use crate::guard::StereoGpuGuard;
use crate::region::{ClipRegion, scissor_for};
use crate::texcoords::TexCoords;

/// Draw-time appearance of a layer.
#[derive(Clone, Copy, Debug)]
struct Appearance {
    alpha: u8,
    opaque: bool,
    premultiplied: bool,
}

impl Appearance {
    fn of(store: &LayerStore, id: LayerId) -> Self {
        Self {
            alpha: store.alpha(id),
            opaque: store.is_opaque(id),
            premultiplied: store.is_premultiplied(id),
        }
    }
}

/// Draws layers with stereo awareness.
///
/// Holds only scratch storage, so one compositor can serve every output.
#[derive(Clone, Debug, Default)]
pub struct StereoCompositor {
    /// Unmodified scissors for the clip region of the layer being drawn.
    scissors: Vec<ScissorRect>,
}

impl StereoCompositor {
    /// Creates a compositor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one layer over `clip` and returns the branch taken.
    ///
    /// The GPU is left with every color channel writable and the stencil
    /// test disabled, and `state` is left drawing [`Eye::Left`] unless the
    /// caller holds an eye pass for the right eye.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    pub fn draw_layer<G: GpuContext + ?Sized>(
        &mut self,
        gpu: &mut G,
        store: &LayerStore,
        id: LayerId,
        clip: &ClipRegion,
        state: &mut GlobalStereoState,
        tracer: &mut Tracer<'_>,
    ) -> DrawPath {
        let config = store.stereo_config(id).unwrap_or(StereoConfig::MONO);
        let appearance = Appearance::of(store, id);
        let stereo = config.is_stereo();

        let fb_height = state.framebuffer().height;
        self.scissors.clear();
        self.scissors
            .extend(clip.rects().iter().map(|&rect| scissor_for(rect, fb_height)));

        let bypass =
            state.is_default_render() || (!stereo && !state.is_frame_packing_render());
        let (path, passes) = if bypass {
            self.draw_textured(gpu, &TexCoords::FULL, appearance, state);
            (DrawPath::Bypass, 1)
        } else {
            self.draw_stereo(gpu, config, appearance, state)
        };

        tracer.layer_draw(&LayerDrawEvent {
            layer_index: id.index(),
            output: state.output(),
            format: state.output_format(),
            path,
            passes,
            rects: u32::try_from(clip.len()).unwrap_or(u32::MAX),
        });
        path
    }

    /// Draws every layer of a frame, bottom to top.
    ///
    /// Frame-packed output walks the list once per eye so that each layer
    /// lands in both halves of the framebuffer. Every other format walks it
    /// once, letting [`draw_layer`](Self::draw_layer) emit both eyes per
    /// layer where needed.
    pub fn compose_frame<G: GpuContext + ?Sized>(
        &mut self,
        gpu: &mut G,
        store: &LayerStore,
        layers: &[(LayerId, ClipRegion)],
        state: &mut GlobalStereoState,
        tracer: &mut Tracer<'_>,
    ) {
        state.begin_frame();

        let eye_passes = if state.is_frame_packing_render() {
            for eye in Eye::BOTH {
                let mut pass = state.eye_pass(eye);
                for (id, clip) in layers {
                    self.draw_layer(gpu, store, *id, clip, &mut pass, tracer);
                }
            }
            2
        } else {
            for (id, clip) in layers {
                self.draw_layer(gpu, store, *id, clip, state, tracer);
            }
            1
        };

        tracer.frame_composed(&FrameComposedEvent {
            output: state.output(),
            format: state.output_format(),
            layers: u32::try_from(layers.len()).unwrap_or(u32::MAX),
            eye_passes,
        });
    }

    fn draw_stereo<G: GpuContext + ?Sized>(
        &self,
        gpu: &mut G,
        config: StereoConfig,
        appearance: Appearance,
        state: &mut GlobalStereoState,
    ) -> (DrawPath, u8) {
        let stereo = config.is_stereo();
        let both_eyes = stereo && config.render_mode == RenderMode::Stereo;
        let split_viewport = state.is_frame_packing_render() || state.is_mono_render();

        let mut view = state.current_eye();
        if split_viewport && let Some(forced) = config.forced_eye() {
            view = forced;
        }

        let mut gpu = StereoGpuGuard::new(gpu);
        gpu.set_linear_filtering();
        if both_eyes {
            if state.is_interleave_render() {
                gpu.set_stencil_test(true);
            } else if state.is_anaglyph_render() {
                gpu.set_color_mask(ColorMask::RED_ALPHA);
            }
        }

        let first = TexCoords::for_half(config.layout, config.is_drawing_first_half(view));
        self.draw_textured(&mut *gpu, &first, appearance, state);

        if !both_eyes || split_viewport {
            return (DrawPath::SingleEye(view), 1);
        }

        let pass = state.eye_pass(Eye::Right);
        if pass.is_anaglyph_render() {
            gpu.set_color_mask(ColorMask::CYAN_ALPHA);
        }
        let second = TexCoords::for_half(config.layout, config.is_drawing_first_half(Eye::Right));
        self.draw_textured(&mut *gpu, &second, appearance, &pass);
        (DrawPath::DualEye, 2)
    }

    /// The ordinary textured-quad draw over the current scissors.
    fn draw_textured<G: GpuContext + ?Sized>(
        &self,
        gpu: &mut G,
        coords: &TexCoords,
        appearance: Appearance,
        state: &GlobalStereoState,
    ) {
        let src = if appearance.premultiplied {
            BlendFactor::One
        } else {
            BlendFactor::SrcAlpha
        };

        if appearance.alpha < u8::MAX {
            let a = f32::from(appearance.alpha) / 255.0;
            gpu.set_color(if appearance.premultiplied {
                [a, a, a, a]
            } else {
                [1.0, 1.0, 1.0, a]
            });
            gpu.set_tex_env(TexEnv::Modulate);
            gpu.set_blend(Some(src));
        } else {
            gpu.set_color([1.0; 4]);
            gpu.set_tex_env(TexEnv::Replace);
            gpu.set_blend((!appearance.opaque).then_some(src));
        }

        gpu.set_tex_coords(coords);
        for &scissor in &self.scissors {
            gpu.set_scissor(state.modify_coords(scissor));
            gpu.draw_quad();
        }
        gpu.set_blend(None);
    }
}

#[cfg(test)]
mod tests {
    use binocle_core::layout::{LayoutType, ViewOrder};
    use binocle_core::output::{OutputFormat, PackingArrangement};
    use binocle_core::state::PipelineConfig;
    use binocle_core::trace::TraceSink;
    use kurbo::Rect;

    use super::*;
    use crate::recording::{GpuCommand, RecordingContext};

    const FULL_SCREEN: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

    fn state(format: OutputFormat) -> GlobalStereoState {
        GlobalStereoState::new(PipelineConfig::new(1920, 1080).with_format(format))
    }

    fn stereo_layer(
        store: &mut LayerStore,
        layout: LayoutType,
        order: ViewOrder,
        mode: RenderMode,
    ) -> LayerId {
        let id = store.create_stereo_layer();
        store.set_bounds(id, FULL_SCREEN);
        store.set_config(id, layout, order, mode);
        id
    }

    fn draw(
        store: &LayerStore,
        id: LayerId,
        clip: &ClipRegion,
        state: &mut GlobalStereoState,
    ) -> (RecordingContext, DrawPath) {
        let mut gpu = RecordingContext::new();
        let path = StereoCompositor::new().draw_layer(
            &mut gpu,
            store,
            id,
            clip,
            state,
            &mut Tracer::none(),
        );
        (gpu, path)
    }

    fn masks(gpu: &RecordingContext) -> Vec<ColorMask> {
        gpu.draws().iter().map(|d| d.color_mask).collect()
    }

    #[test]
    fn anaglyph_side_by_side_draws_red_then_cyan() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let mut state = state(OutputFormat::Anaglyph);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::DualEye);
        let draws = gpu.draws();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].tex_coords.u_range(), (0.0, 0.5));
        assert_eq!(draws[1].tex_coords.u_range(), (0.5, 1.0));
        assert_eq!(masks(&gpu), [ColorMask::RED_ALPHA, ColorMask::CYAN_ALPHA]);
        assert_eq!(gpu.color_mask(), ColorMask::ALL);
        assert!(!gpu.stencil_test());
        assert_eq!(state.current_eye(), Eye::Left);
    }

    #[test]
    fn right_first_swaps_the_halves() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::TopBottom,
            ViewOrder::RightFirst,
            RenderMode::Stereo,
        );
        let mut state = state(OutputFormat::Anaglyph);
        let (gpu, _) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        // Left eye reads the bottom half, right eye the top.
        assert_eq!(gpu.draws()[0].tex_coords.v_range(), (0.0, 0.5));
        assert_eq!(gpu.draws()[1].tex_coords.v_range(), (0.5, 1.0));
    }

    #[test]
    fn default_output_matches_plain_layer() {
        let mut store = LayerStore::new();
        let stereo = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let plain = store.create_layer();
        store.set_bounds(plain, FULL_SCREEN);
        let clip = ClipRegion::from_rect(FULL_SCREEN);
        let mut state = state(OutputFormat::Default);

        let (stereo_gpu, path) = draw(&store, stereo, &clip, &mut state);
        let (plain_gpu, _) = draw(&store, plain, &clip, &mut state);

        assert_eq!(path, DrawPath::Bypass);
        assert_eq!(stereo_gpu.commands(), plain_gpu.commands());
        assert!(
            !stereo_gpu
                .commands()
                .iter()
                .any(|c| matches!(c, GpuCommand::ColorMask(_) | GpuCommand::StencilTest(_)))
        );
        assert_eq!(stereo_gpu.draws()[0].tex_coords, TexCoords::FULL);
    }

    #[test]
    fn interleave_with_empty_clip_still_restores() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::RowInterleaved,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let mut state = state(OutputFormat::Interleave);
        let (gpu, _) = draw(&store, id, &ClipRegion::new(), &mut state);

        assert!(gpu.draws().is_empty());
        assert!(gpu.commands().contains(&GpuCommand::StencilTest(true)));
        assert_eq!(
            gpu.commands()[gpu.commands().len() - 2..],
            [
                GpuCommand::ColorMask(ColorMask::ALL),
                GpuCommand::StencilTest(false),
            ]
        );
        assert_eq!(state.current_eye(), Eye::Left);
    }

    #[test]
    fn interleave_draws_both_eyes_under_stencil() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::ColInterleaved,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let mut state = state(OutputFormat::Interleave);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::DualEye);
        assert_eq!(gpu.draws().len(), 2);
        assert!(gpu.draws().iter().all(|d| d.stencil_test));
        assert!(gpu.draws().iter().all(|d| d.tex_coords == TexCoords::FULL));
        assert!(gpu.draws().iter().all(|d| d.color_mask == ColorMask::ALL));
        let toggles: Vec<_> = gpu
            .commands()
            .iter()
            .filter(|c| matches!(c, GpuCommand::StencilTest(_)))
            .collect();
        assert_eq!(
            toggles,
            [&GpuCommand::StencilTest(true), &GpuCommand::StencilTest(false)]
        );
    }

    #[test]
    fn anaglyph_ignores_forced_eye() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::RenderRight,
        );
        let mut state = state(OutputFormat::Anaglyph);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Left));
        assert_eq!(gpu.draws().len(), 1);
        assert_eq!(gpu.draws()[0].tex_coords.u_range(), (0.0, 0.5));
        assert_eq!(gpu.draws()[0].color_mask, ColorMask::ALL);
    }

    #[test]
    fn frame_packing_honors_forced_eye() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::TopBottom,
            ViewOrder::LeftFirst,
            RenderMode::RenderRight,
        );
        let mut state = state(OutputFormat::FramePacking);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Right));
        let draws = gpu.draws();
        assert_eq!(draws.len(), 1);
        // Right view of a left-first top/bottom texture is the bottom half.
        assert_eq!(draws[0].tex_coords.v_range(), (0.0, 0.5));
        // Drawn into the left eye's half of a side-by-side framebuffer.
        assert_eq!(draws[0].scissor, ScissorRect::new(0, 0, 960, 1080));
        assert!(gpu.commands().contains(&GpuCommand::LinearFiltering));
    }

    #[test]
    fn mono_output_draws_current_eye_once() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let mut state = state(OutputFormat::Mono);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Left));
        assert_eq!(gpu.draws().len(), 1);
        assert_eq!(gpu.draws()[0].tex_coords.u_range(), (0.0, 0.5));
        assert_eq!(gpu.draws()[0].scissor, ScissorRect::new(0, 0, 1920, 1080));
        assert!(!gpu.commands().contains(&GpuCommand::StencilTest(true)));
    }

    #[test]
    fn interleave_ignores_forced_eye() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::RenderRight,
        );
        let mut state = state(OutputFormat::Interleave);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Left));
        assert_eq!(gpu.draws().len(), 1);
        assert_eq!(gpu.draws()[0].tex_coords.u_range(), (0.0, 0.5));
        assert!(!gpu.commands().contains(&GpuCommand::StencilTest(true)));
    }

    #[test]
    fn mono_output_honors_forced_eye() {
        let mut store = LayerStore::new();
        let id = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::RenderRight,
        );
        let mut state = state(OutputFormat::Mono);
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Right));
        assert_eq!(gpu.draws().len(), 1);
        assert_eq!(gpu.draws()[0].tex_coords.u_range(), (0.5, 1.0));
        assert_eq!(state.current_eye(), Eye::Left);
    }

    #[test]
    fn plain_layer_bypasses_outside_frame_packing() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let clip = ClipRegion::from_rect(FULL_SCREEN);

        for format in [OutputFormat::Interleave, OutputFormat::Anaglyph, OutputFormat::Mono] {
            let mut state = state(format);
            let (gpu, path) = draw(&store, id, &clip, &mut state);
            assert_eq!(path, DrawPath::Bypass);
            assert!(!gpu.commands().contains(&GpuCommand::LinearFiltering));
        }
    }

    #[test]
    fn plain_layer_is_squeezed_under_frame_packing() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let mut state = GlobalStereoState::new(
            PipelineConfig::new(1920, 1080)
                .with_format(OutputFormat::FramePacking)
                .with_packing(PackingArrangement::TopBottom),
        );
        let (gpu, path) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(path, DrawPath::SingleEye(Eye::Left));
        assert_eq!(gpu.draws()[0].tex_coords, TexCoords::FULL);
        assert_eq!(gpu.draws()[0].scissor, ScissorRect::new(0, 540, 1920, 540));
    }

    #[test]
    fn translucent_straight_alpha_modulates() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_alpha(id, 51);
        store.set_premultiplied(id, false);
        let mut state = state(OutputFormat::Default);
        let (gpu, _) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        let cmds = gpu.commands();
        assert_eq!(cmds[0], GpuCommand::Color([1.0, 1.0, 1.0, 0.2]));
        assert_eq!(cmds[1], GpuCommand::TexEnv(TexEnv::Modulate));
        assert_eq!(cmds[2], GpuCommand::Blend(Some(BlendFactor::SrcAlpha)));
        assert_eq!(gpu.draws()[0].blend, Some(BlendFactor::SrcAlpha));
        assert!(!gpu.blending());
    }

    #[test]
    fn opaque_full_alpha_draws_without_blending() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_opaque(id, true);
        let mut state = state(OutputFormat::Default);
        let (gpu, _) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(gpu.commands()[0], GpuCommand::Color([1.0; 4]));
        assert_eq!(gpu.commands()[1], GpuCommand::TexEnv(TexEnv::Replace));
        assert_eq!(gpu.draws()[0].blend, None);
    }

    #[test]
    fn premultiplied_translucent_scales_all_channels() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_alpha(id, 0);
        let mut state = state(OutputFormat::Default);
        let (gpu, _) = draw(&store, id, &ClipRegion::from_rect(FULL_SCREEN), &mut state);

        assert_eq!(gpu.commands()[0], GpuCommand::Color([0.0; 4]));
        assert_eq!(gpu.draws()[0].blend, Some(BlendFactor::One));
    }

    #[test]
    fn one_quad_per_clip_rect() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let clip: ClipRegion = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(100.0, 0.0, 200.0, 50.0),
        ]
        .into_iter()
        .collect();
        let mut state = state(OutputFormat::Default);
        let (gpu, _) = draw(&store, id, &clip, &mut state);

        let scissors: Vec<_> = gpu.draws().iter().map(|d| d.scissor).collect();
        assert_eq!(
            scissors,
            [
                ScissorRect::new(0, 980, 100, 100),
                ScissorRect::new(100, 1030, 100, 50),
            ]
        );
    }

    #[derive(Default)]
    struct Sink {
        draws: Vec<LayerDrawEvent>,
        frames: Vec<FrameComposedEvent>,
    }

    impl TraceSink for Sink {
        fn on_layer_draw(&mut self, e: &LayerDrawEvent) {
            self.draws.push(*e);
        }

        fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
            self.frames.push(*e);
        }
    }

    #[test]
    fn compose_frame_packs_each_eye_into_its_half() {
        let mut store = LayerStore::new();
        let background = store.create_layer();
        let video = stereo_layer(
            &mut store,
            LayoutType::SideBySide,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let layers = [
            (background, ClipRegion::from_rect(FULL_SCREEN)),
            (video, ClipRegion::from_rect(FULL_SCREEN)),
        ];
        let mut state = state(OutputFormat::FramePacking);
        state.set_draw_state(Eye::Right);

        let mut gpu = RecordingContext::new();
        let mut sink = Sink::default();
        StereoCompositor::new().compose_frame(
            &mut gpu,
            &store,
            &layers,
            &mut state,
            &mut Tracer::new(&mut sink),
        );

        let draws = gpu.draws();
        assert_eq!(draws.len(), 4);
        let left_half = ScissorRect::new(0, 0, 960, 1080);
        let right_half = ScissorRect::new(960, 0, 960, 1080);
        assert_eq!(draws[0].scissor, left_half);
        assert_eq!(draws[1].scissor, left_half);
        assert_eq!(draws[1].tex_coords.u_range(), (0.0, 0.5));
        assert_eq!(draws[2].scissor, right_half);
        assert_eq!(draws[3].scissor, right_half);
        assert_eq!(draws[3].tex_coords.u_range(), (0.5, 1.0));
        assert_eq!(state.current_eye(), Eye::Left);

        assert_eq!(sink.draws.len(), 4);
        assert_eq!(sink.draws[3].path, DrawPath::SingleEye(Eye::Right));
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].eye_passes, 2);
        assert_eq!(sink.frames[0].layers, 2);
    }

    #[test]
    fn compose_frame_walks_layers_once_for_anaglyph() {
        let mut store = LayerStore::new();
        let video = stereo_layer(
            &mut store,
            LayoutType::TopBottom,
            ViewOrder::LeftFirst,
            RenderMode::Stereo,
        );
        let layers = [(video, ClipRegion::from_rect(FULL_SCREEN))];
        let mut state = state(OutputFormat::Anaglyph);

        let mut gpu = RecordingContext::new();
        let mut sink = Sink::default();
        StereoCompositor::new().compose_frame(
            &mut gpu,
            &store,
            &layers,
            &mut state,
            &mut Tracer::new(&mut sink),
        );

        assert_eq!(gpu.draws().len(), 2);
        assert_eq!(sink.draws[0].passes, 2);
        assert_eq!(sink.draws[0].rects, 1);
        assert_eq!(sink.frames[0].eye_passes, 1);
    }
}
