//! Per-side viewbox expansion.
//!
//! Every key is a size multiplier where `1.0` means "no expansion". A side
//! resolves in this order, first match wins:
//!
//! | Side     | Specific       | Axis fallback (halved) | Global (halved) |
//! |----------|----------------|------------------------|-----------------|
//! | top      | `expandTop`    | `expandVertical`       | `expand`        |
//! | bottom   | `expandBottom` | `expandVertical`       | `expand`        |
//! | left     | `expandLeft`   | `expandHorizontal`     | `expand`        |
//! | right    | `expandRight`  | `expandHorizontal`     | `expand`        |
//!
//! Halving splits an axis-wide growth evenly between the two sides. Values
//! below the baseline resolve to 0, so a side never shrinks the box.

use std::f64::consts::FRAC_PI_4;

use serde::Serialize;

/// Optional expansion multipliers, one per side plus axis and global fallbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionSpec {
    pub expand_top: Option<f64>,
    pub expand_bottom: Option<f64>,
    pub expand_left: Option<f64>,
    pub expand_right: Option<f64>,
    pub expand_vertical: Option<f64>,
    pub expand_horizontal: Option<f64>,
    pub expand: Option<f64>,
}

/// Resolved growth per side, as a fraction of the diameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sides {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ExpansionSpec {
    /// No expansion on any side.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            expand_top: None,
            expand_bottom: None,
            expand_left: None,
            expand_right: None,
            expand_vertical: None,
            expand_horizontal: None,
            expand: None,
        }
    }

    /// Uniform expansion by `factor` on both axes.
    #[must_use]
    pub const fn uniform(factor: f64) -> Self {
        Self {
            expand: Some(factor),
            ..Self::none()
        }
    }

    /// Grow the box by `sec(π/4)` so the clip ellipse circumscribes the
    /// unexpanded square.
    #[must_use]
    pub fn circumscribed() -> Self {
        Self::uniform(1.0 / FRAC_PI_4.cos())
    }

    /// Set a multiplier by its camelCase key (`expandTop`, `expand`, …).
    ///
    /// Returns `false` if the key is not recognized.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "expandTop" => &mut self.expand_top,
            "expandBottom" => &mut self.expand_bottom,
            "expandLeft" => &mut self.expand_left,
            "expandRight" => &mut self.expand_right,
            "expandVertical" => &mut self.expand_vertical,
            "expandHorizontal" => &mut self.expand_horizontal,
            "expand" => &mut self.expand,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Resolve all four sides.
    #[must_use]
    pub fn resolve(&self) -> Sides {
        Sides {
            top: self.side(self.expand_top, self.expand_vertical),
            bottom: self.side(self.expand_bottom, self.expand_vertical),
            left: self.side(self.expand_left, self.expand_horizontal),
            right: self.side(self.expand_right, self.expand_horizontal),
        }
    }

    fn side(&self, specific: Option<f64>, axis: Option<f64>) -> f64 {
        let growth = specific
            .map(|v| v - 1.0)
            .or_else(|| axis.map(|v| (v - 1.0) / 2.0))
            .or_else(|| self.expand.map(|v| (v - 1.0) / 2.0))
            .unwrap_or(0.0);
        growth.max(0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
