// Copyright 2026 the Binocle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event, each on its own line.
//! Every object carries an `"event"` key naming the event kind.

use std::io::Write;

use serde_json::{Value, json};

use binocle_core::trace::{
    FrameComposedEvent, LayerDrawEvent, PageFlipEvent, PageFlipOutcome, TraceSink,
};

/// Writes trace events as newline-delimited JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_page_flip(&mut self, e: &PageFlipEvent) {
        let value = match e.outcome {
            PageFlipOutcome::Rejected { bits } => json!({
                "event": "page_flip",
                "layer": e.layer_index,
                "outcome": "rejected",
                "layout_bits": bits,
            }),
            PageFlipOutcome::Applied { config, activated } => json!({
                "event": "page_flip",
                "layer": e.layer_index,
                "outcome": "applied",
                "layout": format!("{:?}", config.layout),
                "view_order": format!("{:?}", config.view_order),
                "render_mode": format!("{:?}", config.render_mode),
                "activated": activated,
            }),
        };
        self.emit(&value);
    }

    fn on_layer_draw(&mut self, e: &LayerDrawEvent) {
        self.emit(&json!({
            "event": "layer_draw",
            "layer": e.layer_index,
            "output": e.output.0,
            "format": e.format.as_str(),
            "path": e.path.as_str(),
            "passes": e.passes,
            "rects": e.rects,
        }));
    }

    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        self.emit(&json!({
            "event": "frame_composed",
            "output": e.output.0,
            "format": e.format.as_str(),
            "layers": e.layers,
            "eye_passes": e.eye_passes,
        }));
    }
}
