// SPDX-License-Identifier: MIT
//
// Scene composition.
//
// A Logo holds the geometry inputs; `Logo::scene` pairs every stripe rect
// with the next frame of a fresh style cycle. The pairing is positional,
// which is why the compile-time check below ties the style period to the
// number of rects each stripe emits.

use pw_geometry::{
    ClipRegion, ClipShape, ExpansionSpec, Face, RECTS_PER_STRIPE, Rect, StripeRectTriple,
    StripeWidths, compute_stripe_rects, compute_viewbox, offsets,
};
use pw_palette::{Palette, STYLE_PERIOD, StyleCycle, StyleFrame};
use serde::Serialize;
use tracing::debug;

// One style period paints exactly two stripes.
const _: () = assert!(STYLE_PERIOD == 2 * RECTS_PER_STRIPE);

/// Rotation applied to the stripe group, in degrees.
pub const GROUP_ROTATION: f64 = -45.0;

// ─── Logo ────────────────────────────────────────────────────────────────────

/// Geometry inputs for one logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Logo {
    pub widths: StripeWidths,
    pub expansion: ExpansionSpec,
    pub shape: ClipShape,
}

impl Logo {
    #[must_use]
    pub const fn new(widths: StripeWidths, expansion: ExpansionSpec, shape: ClipShape) -> Self {
        Self {
            widths,
            expansion,
            shape,
        }
    }

    /// Compose a scene painted with a fresh cycle of `palette`.
    #[must_use]
    pub fn scene(&self, palette: &Palette) -> Scene {
        Scene::compose(self, palette.name(), palette.style_cycle())
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// One rect to draw, with its style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    /// Index of the stripe this rect belongs to.
    pub stripe: usize,
    pub face: Face,
    pub rect: Rect,
    pub style: StyleFrame,
}

/// Everything a renderer needs, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub palette: String,
    pub view_box: Rect,
    pub clip: ClipRegion,
    /// Degrees, applied to the whole stripe group.
    pub rotation: f64,
    pub draws: Vec<DrawCommand>,
}

impl Scene {
    /// Zip the logo's stripe rects with `styles`.
    ///
    /// `styles` is consumed from its current position; pass a fresh cycle
    /// for the canonical coloring.
    #[must_use]
    pub fn compose(logo: &Logo, palette: &str, mut styles: StyleCycle) -> Self {
        let mat = compute_viewbox(&logo.widths, &logo.expansion, logo.shape);
        let triples = compute_stripe_rects(&logo.widths, &offsets(&logo.widths));

        let draws: Vec<DrawCommand> = triples
            .iter()
            .flat_map(|t: &StripeRectTriple| t.faces().map(|f| (t.index, f)))
            .map(|(stripe, f)| DrawCommand {
                stripe,
                face: f.face,
                rect: f.rect,
                style: styles.next_style(),
            })
            .collect();

        debug!(
            palette,
            stripes = triples.len(),
            draws = draws.len(),
            "composed scene"
        );

        Self {
            palette: palette.to_string(),
            view_box: mat.view_box,
            clip: mat.clip,
            rotation: GROUP_ROTATION,
            draws,
        }
    }

    /// Draw commands that are actually painted.
    pub fn visible(&self) -> impl Iterator<Item = &DrawCommand> {
        self.draws.iter().filter(|d| !d.style.is_hidden())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
