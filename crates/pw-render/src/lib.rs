// SPDX-License-Identifier: MIT
//
// pw-render — turns stripe geometry and palette styles into a drawing.
//
// The pipeline is one pass, top to bottom:
//
//   StripeWidths + ExpansionSpec + ClipShape ──▶ pw-geometry ──▶ Mat, rects
//   Palette ──▶ pw-palette ──▶ StyleCycle
//   rects ⨯ styles (zipped in draw order) ──▶ Scene
//   Scene ──▶ Renderer (SVG markup, JSON) ──▶ any io::Write
//
// A Scene is plain data. Renderers never call back into geometry or
// palette code, so a new output format only needs to walk `Scene::draws`.

pub mod buffer;
pub mod json;
pub mod scene;
pub mod svg;

use std::io::{self, Write};

use thiserror::Error;

pub use json::JsonRenderer;
pub use scene::{DrawCommand, Logo, Scene};
pub use svg::SvgRenderer;

/// Errors raised while writing a rendered scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("renderer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Something that can draw a [`Scene`].
pub trait Renderer {
    /// Write the rendered scene to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or `out` rejects the bytes.
    fn render(&self, scene: &Scene, out: &mut dyn Write) -> Result<()>;

    /// Render into a `String`.
    ///
    /// # Errors
    ///
    /// Same as [`Renderer::render`], plus invalid UTF-8 output.
    fn render_to_string(&self, scene: &Scene) -> Result<String> {
        let mut bytes = Vec::new();
        self.render(scene, &mut bytes)?;
        Ok(String::from_utf8(bytes)?)
    }
}
