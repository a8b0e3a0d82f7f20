// SPDX-License-Identifier: MIT
//
// SVG markup generation.
//
// The free functions write one tag each to any `impl Write`. No state, no
// decisions about layout; `SvgRenderer` sequences them into a document:
//
//   <svg viewBox>
//     <defs><clipPath id>RECT|ELLIPSE</clipPath></defs>
//     <g clip-path="url(#id)">
//       <g transform="rotate(-45)">
//         <rect style="fill:…"/> | <rect style="display:none"/>   × 3N
//       </g>
//     </g>
//   </svg>
//
// Hidden rects are still emitted so the document mirrors the draw list
// one-to-one.

use std::io::{self, Write};

use pw_geometry::{ClipRegion, Ellipse, Rect};
use pw_palette::StyleFrame;
use tracing::debug;

use crate::buffer::MarkupBuffer;
use crate::scene::Scene;
use crate::{Renderer, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ─── Attribute helpers ──────────────────────────────────────────────────────

/// Escape a string for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inline CSS for a style frame.
#[must_use]
pub fn style_css(style: StyleFrame) -> String {
    match style {
        StyleFrame::Fill(color) => format!("fill:{color}"),
        StyleFrame::Hidden => "display:none".to_string(),
    }
}

// ─── Document ───────────────────────────────────────────────────────────────

/// `<svg xmlns=… viewBox="x y w h">`
#[inline]
pub fn open_svg(w: &mut impl Write, view_box: &Rect) -> io::Result<()> {
    write!(w, r#"<svg xmlns="{SVG_NS}" viewBox="{view_box}">"#)
}

#[inline]
pub fn close_svg(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"</svg>")
}

#[inline]
pub fn open_defs(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"<defs>")
}

#[inline]
pub fn close_defs(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"</defs>")
}

// ─── Clipping ───────────────────────────────────────────────────────────────

#[inline]
pub fn open_clip_path(w: &mut impl Write, id: &str) -> io::Result<()> {
    write!(w, r#"<clipPath id="{}">"#, escape_attr(id))
}

#[inline]
pub fn close_clip_path(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"</clipPath>")
}

/// The clip geometry as a `<rect/>` or `<ellipse/>`.
pub fn clip_region(w: &mut impl Write, region: &ClipRegion) -> io::Result<()> {
    match region {
        ClipRegion::Rect(r) => rect(w, r, None),
        ClipRegion::Ellipse(e) => ellipse(w, e),
    }
}

// ─── Shapes ─────────────────────────────────────────────────────────────────

/// `<rect x y width height [style]/>`
pub fn rect(w: &mut impl Write, r: &Rect, style: Option<&str>) -> io::Result<()> {
    write!(
        w,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.x, r.y, r.width, r.height
    )?;
    if let Some(style) = style {
        write!(w, r#" style="{}""#, escape_attr(style))?;
    }
    w.write_all(b"/>")
}

/// `<ellipse cx cy rx ry/>`
pub fn ellipse(w: &mut impl Write, e: &Ellipse) -> io::Result<()> {
    write!(
        w,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
        e.cx, e.cy, e.rx, e.ry
    )
}

// ─── Groups ─────────────────────────────────────────────────────────────────

/// `<g clip-path="url(#id)">`
#[inline]
pub fn open_clipped_group(w: &mut impl Write, clip_id: &str) -> io::Result<()> {
    write!(w, r#"<g clip-path="url(#{})">"#, escape_attr(clip_id))
}

/// `<g transform="rotate(deg)">`
#[inline]
pub fn open_rotated_group(w: &mut impl Write, degrees: f64) -> io::Result<()> {
    write!(w, r#"<g transform="rotate({degrees})">"#)
}

#[inline]
pub fn close_group(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"</g>")
}

// ─── SvgRenderer ────────────────────────────────────────────────────────────

/// Renders a scene as a standalone SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgRenderer {
    /// `id` of the `<clipPath>` element.
    pub clip_id: String,
    /// One element per indented line instead of a single line.
    pub pretty: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            clip_id: "clip-path".to_string(),
            pretty: true,
        }
    }
}

impl SvgRenderer {
    /// Sequence the document into `buf`.
    fn write_document(&self, scene: &Scene, buf: &mut MarkupBuffer) -> io::Result<()> {
        buf.open(|w| open_svg(w, &scene.view_box))?;

        buf.open(open_defs)?;
        buf.open(|w| open_clip_path(w, &self.clip_id))?;
        buf.leaf(|w| clip_region(w, &scene.clip))?;
        buf.close(close_clip_path)?;
        buf.close(close_defs)?;

        buf.open(|w| open_clipped_group(w, &self.clip_id))?;
        buf.open(|w| open_rotated_group(w, scene.rotation))?;
        for draw in &scene.draws {
            let css = style_css(draw.style);
            buf.leaf(|w| rect(w, &draw.rect, Some(&css)))?;
        }
        buf.close(close_group)?;
        buf.close(close_group)?;

        buf.close(close_svg)
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, scene: &Scene, out: &mut dyn Write) -> Result<()> {
        let mut buf = MarkupBuffer::new(self.pretty);
        self.write_document(scene, &mut buf)?;
        debug!(bytes = buf.len(), draws = scene.draws.len(), "rendered svg");
        buf.flush_to(out)?;
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
