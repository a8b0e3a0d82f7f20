//! Stripe rectangles.
//!
//! Each stripe is drawn as three overlapping axis-aligned rects which, once
//! the renderer rotates the group by 45°, read as the arms of a pinwheel:
//!
//! ```text
//!   top_right  x = -(offset + w)   y = -inradius   w × inradius
//!   left       x = -inradius       y = offset      inradius × w
//!   bottom     x = offset          y = -inradius   w × circumradius
//! ```
//!
//! `inradius` is the sum of all widths and `circumradius` twice that.

use serde::Serialize;
use tracing::trace;

use crate::mat::Rect;
use crate::widths::StripeWidths;

/// Rects emitted per stripe. The palette's style period is twice this.
pub const RECTS_PER_STRIPE: usize = 3;

/// Which arm of the stripe a rect draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    TopRight,
    Left,
    Bottom,
}

impl Face {
    /// All faces in draw order.
    pub const ALL: [Self; RECTS_PER_STRIPE] = [Self::TopRight, Self::Left, Self::Bottom];

    /// Stable key used by markup renderers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopRight => "top_right",
            Self::Left => "left",
            Self::Bottom => "bottom",
        }
    }
}

/// One placed rect of a stripe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripeRect {
    pub face: Face,
    #[serde(flatten)]
    pub rect: Rect,
}

/// The three rects of one stripe, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripeRectTriple {
    /// Position of the stripe in the width list.
    pub index: usize,
    pub top_right: Rect,
    pub left: Rect,
    pub bottom: Rect,
}

impl StripeRectTriple {
    /// Build the triple for one `(width, offset)` pair.
    #[must_use]
    pub fn new(index: usize, width: f64, offset: f64, inradius: f64) -> Self {
        let circumradius = 2.0 * inradius;
        Self {
            index,
            top_right: Rect::new(-(offset + width), -inradius, width, inradius),
            left: Rect::new(-inradius, offset, inradius, width),
            bottom: Rect::new(offset, -inradius, width, circumradius),
        }
    }

    /// The rects in draw order, each tagged with its face.
    #[must_use]
    pub const fn faces(&self) -> [StripeRect; RECTS_PER_STRIPE] {
        [
            StripeRect { face: Face::TopRight, rect: self.top_right },
            StripeRect { face: Face::Left, rect: self.left },
            StripeRect { face: Face::Bottom, rect: self.bottom },
        ]
    }
}

/// Compute one triple per `(width, offset)` pair, in input order.
///
/// `offsets` normally comes from [`crate::offsets`]; if the lengths differ
/// the extra entries of the longer slice are ignored.
#[must_use]
pub fn compute_stripe_rects(widths: &StripeWidths, offsets: &[f64]) -> Vec<StripeRectTriple> {
    let inradius = widths.total();
    widths
        .as_slice()
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(i, (&width, &offset))| {
            trace!(i, width, offset, "stripe");
            StripeRectTriple::new(i, width, offset, inradius)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
