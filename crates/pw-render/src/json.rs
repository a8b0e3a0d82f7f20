// SPDX-License-Identifier: MIT
//
// JSON output: the scene as data, for renderers that live outside this
// process (canvas front-ends, immediate-mode UIs).

use std::io::Write;

use tracing::debug;

use crate::scene::Scene;
use crate::{Renderer, Result};

/// Serializes a scene as JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, scene: &Scene, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, scene)?;
        } else {
            serde_json::to_writer(&mut *out, scene)?;
        }
        out.write_all(b"\n")?;
        debug!(draws = scene.draws.len(), "rendered json");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
