//! Stripe widths and their cumulative offsets.
//!
//! Widths are ordered innermost to outermost. The offset of stripe `i` is
//! the sum of every width before it, so stripes tile edge to edge.

use serde::Serialize;

use crate::{GeometryError, Result};

/// Number of leading widths that determine the logo's radius.
///
/// The logo shows four concentric stripes. Any widths past the fourth are
/// still drawn (they open up the mat when the viewbox is expanded) but do
/// not enlarge the bounding box.
pub const RADIUS_STRIPES: usize = 4;

/// The golden ratio, used by [`StripeWidths::golden`].
pub const PHI: f64 = 1.618_033_988_749_895;

/// An ordered, non-empty list of positive stripe widths.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StripeWidths(Vec<f64>);

impl StripeWidths {
    /// Validate and wrap a list of widths.
    ///
    /// # Errors
    ///
    /// [`GeometryError::EmptyWidths`] for an empty list and
    /// [`GeometryError::InvalidWidth`] for the first entry that is not a
    /// positive finite number, and [`GeometryError::TotalOverflow`] when
    /// the outermost extent `2 * total` is not finite.
    pub fn new(widths: Vec<f64>) -> Result<Self> {
        if widths.is_empty() {
            return Err(GeometryError::EmptyWidths);
        }
        if let Some((index, &value)) = widths
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(GeometryError::InvalidWidth { index, value });
        }
        let total: f64 = widths.iter().sum();
        if !(2.0 * total).is_finite() {
            return Err(GeometryError::TotalOverflow { total });
        }
        Ok(Self(widths))
    }

    /// The stock logo: Fibonacci widths `[1, 2, 3, 5, 8]`.
    #[must_use]
    pub fn fibonacci() -> Self {
        Self(vec![1.0, 2.0, 3.0, 5.0, 8.0])
    }

    /// `limit` widths growing by the golden ratio: `φ⁰, φ¹, …`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::EmptyWidths`] when `limit` is zero,
    /// [`GeometryError::InvalidWidth`] when `φ^i` itself overflows, and
    /// [`GeometryError::TotalOverflow`] when the widths fit but their sum
    /// does not.
    pub fn golden(limit: usize) -> Result<Self> {
        let widths: Vec<f64> = std::iter::successors(Some(1.0_f64), |w| Some(w * PHI))
            .take(limit)
            .take_while(|w| w.is_finite())
            .collect();
        if widths.len() < limit {
            return Err(GeometryError::InvalidWidth {
                index: widths.len(),
                value: f64::INFINITY,
            });
        }
        Self::new(widths)
    }

    /// The widths as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of stripes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every width (the inradius of the stripe drawing).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum of the first [`RADIUS_STRIPES`] widths, or all of them when there
    /// are fewer.
    #[must_use]
    pub fn visible_total(&self) -> f64 {
        self.0.iter().take(RADIUS_STRIPES).sum()
    }
}

impl Default for StripeWidths {
    fn default() -> Self {
        Self::fibonacci()
    }
}

/// Cumulative offsets: `offsets[i] = widths[0] + … + widths[i-1]`.
///
/// Same length as `widths`; the first entry is always 0.
#[must_use]
pub fn offsets(widths: &StripeWidths) -> Vec<f64> {
    widths
        .as_slice()
        .iter()
        .scan(0.0, |acc, &w| {
            let offset = *acc;
            *acc += w;
            Some(offset)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
