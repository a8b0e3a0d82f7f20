//! # pw-geometry — stripe geometry for the pinwheel logo
//!
//! Pure functions that turn an ordered list of stripe widths into
//! renderer-agnostic placement data:
//!
//! - **[`widths`]** — `StripeWidths`, validated at construction, and the
//!   prefix-sum `offsets`
//! - **[`expansion`]** — `ExpansionSpec`, per-side size multipliers with
//!   vertical/horizontal/global fallbacks
//! - **[`mat`]** — `compute_viewbox`: bounding box and clip region
//! - **[`stripes`]** — `compute_stripe_rects`: three rects per stripe
//!
//! Everything is computed before the 45° group rotation a renderer applies.
//!
//! # Coupling with the palette cycler
//!
//! Each stripe emits exactly [`RECTS_PER_STRIPE`] rects in a fixed face
//! order. The palette's style period spans two stripes, so reordering faces
//! or changing the count here miscolors the logo unless the style period
//! changes with it.

pub mod expansion;
pub mod mat;
pub mod stripes;
pub mod widths;

use thiserror::Error;

pub use expansion::{ExpansionSpec, Sides};
pub use mat::{ClipRegion, ClipShape, Ellipse, Mat, Rect, compute_viewbox};
pub use stripes::{Face, RECTS_PER_STRIPE, StripeRect, StripeRectTriple, compute_stripe_rects};
pub use widths::{RADIUS_STRIPES, StripeWidths, offsets};

/// Errors raised while validating geometry inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The width list was empty.
    #[error("stripe widths must not be empty")]
    EmptyWidths,

    /// A width was zero, negative, or not finite.
    #[error("stripe width #{index} must be a positive finite number, got {value}")]
    InvalidWidth { index: usize, value: f64 },

    /// Every width is valid but the drawing's extent (twice the total)
    /// is not a finite number.
    #[error("stripe widths are too large: twice their total ({total}) overflows")]
    TotalOverflow { total: f64 },

    /// An unrecognized clip shape name.
    #[error("unknown clip shape `{0}` (expected `rect` or `ellipse`)")]
    UnknownShape(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GeometryError>;
