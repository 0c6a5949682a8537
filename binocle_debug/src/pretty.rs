// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use binocle_core::trace::{
    FrameComposedEvent, LayerDrawEvent, PageFlipEvent, PageFlipOutcome, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_page_flip(&mut self, e: &PageFlipEvent) {
        let _ = match e.outcome {
            PageFlipOutcome::Rejected { bits } => writeln!(
                self.writer,
                "[flip] layer={} rejected layout={bits}",
                e.layer_index,
            ),
            PageFlipOutcome::Applied { config, activated } => writeln!(
                self.writer,
                "[flip] layer={} layout={:?} order={:?} mode={:?}{}",
                e.layer_index,
                config.layout,
                config.view_order,
                config.render_mode,
                if activated { " activated" } else { "" },
            ),
        };
    }

    fn on_layer_draw(&mut self, e: &LayerDrawEvent) {
        let _ = writeln!(
            self.writer,
            "[draw] layer={} output={} format={} path={} passes={} rects={}",
            e.layer_index,
            e.output.0,
            e.format.as_str(),
            e.path.as_str(),
            e.passes,
            e.rects,
        );
    }

    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] output={} format={} layers={} eye_passes={}",
            e.output.0,
            e.format.as_str(),
            e.layers,
            e.eye_passes,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binocle_core::config::StereoConfig;
    use binocle_core::layout::{Eye, LayoutType, RenderMode, ViewOrder};
    use binocle_core::output::{OutputFormat, OutputId};
    use binocle_core::trace::DrawPath;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_draw() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_layer_draw(&LayerDrawEvent {
            layer_index: 3,
            output: OutputId(1),
            format: OutputFormat::Anaglyph,
            path: DrawPath::DualEye,
            passes: 2,
            rects: 4,
        });
        let output = output(sink);
        assert!(output.starts_with("[draw] layer=3"), "got: {output}");
        assert!(output.contains("format=anaglyph"), "got: {output}");
        assert!(output.contains("path=dual"), "got: {output}");
    }

    #[test]
    fn pretty_print_flip_outcomes() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_page_flip(&PageFlipEvent {
            layer_index: 0,
            outcome: PageFlipOutcome::Rejected { bits: 9 },
        });
        sink.on_page_flip(&PageFlipEvent {
            layer_index: 0,
            outcome: PageFlipOutcome::Applied {
                config: StereoConfig::new(
                    LayoutType::TopBottom,
                    ViewOrder::LeftFirst,
                    RenderMode::Stereo,
                ),
                activated: true,
            },
        });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("rejected layout=9"), "got: {output}");
        assert!(lines[1].contains("layout=TopBottom"), "got: {output}");
        assert!(lines[1].ends_with("activated"), "got: {output}");
    }

    #[test]
    fn pretty_print_frame() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_frame_composed(&FrameComposedEvent {
            output: OutputId(0),
            format: OutputFormat::FramePacking,
            layers: 5,
            eye_passes: 2,
        });
        let output = output(sink);
        assert!(output.contains("format=frame-packing"), "got: {output}");
        assert!(output.contains("eye_passes=2"), "got: {output}");
        assert_eq!(DrawPath::SingleEye(Eye::Right).as_str(), "right");
    }
}
