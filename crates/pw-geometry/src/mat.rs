//! The mat: the logo's bounding box and the clip region cut from it.
//!
//! The unexpanded box is the square circumscribing the rotated stripes:
//! its half-side is `cos(π/4) * sum(first four widths)`. Expansion grows
//! each side by a fraction of the diameter.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::expansion::{ExpansionSpec, Sides};
use crate::widths::StripeWidths;
use crate::GeometryError;

// ---------------------------------------------------------------------------
// Rect / Ellipse
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center point `(cx, cy)`.
    #[inline]
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `other` lies entirely inside this rect (edges inclusive,
    /// with a small tolerance for float noise).
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.x + other.width <= self.x + self.width + EPS
            && other.y + other.height <= self.y + self.height + EPS
    }

    /// The four numbers as an array, in viewbox order.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// Formats as a `viewBox` attribute value: `"x y width height"`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// An axis-aligned ellipse: center plus half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    /// The ellipse inscribed in `rect`.
    #[must_use]
    pub fn inscribed(rect: &Rect) -> Self {
        let (cx, cy) = rect.center();
        Self {
            cx,
            cy,
            rx: rect.width / 2.0,
            ry: rect.height / 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Clip shape / region
// ---------------------------------------------------------------------------

/// Which clip geometry to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipShape {
    #[default]
    Rect,
    Ellipse,
}

impl FromStr for ClipShape {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(Self::Rect),
            "ellipse" => Ok(Self::Ellipse),
            _ => Err(GeometryError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for ClipShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
        })
    }
}

/// The concrete clip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ClipRegion {
    Rect(Rect),
    Ellipse(Ellipse),
}

impl ClipRegion {
    /// Center of the region.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        match self {
            Self::Rect(r) => r.center(),
            Self::Ellipse(e) => (e.cx, e.cy),
        }
    }
}

// ---------------------------------------------------------------------------
// Mat
// ---------------------------------------------------------------------------

/// Result of [`compute_viewbox`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mat {
    /// Half-side of the unexpanded square.
    pub radius: f64,
    pub diameter: f64,
    /// Resolved expansion, as fractions of the diameter.
    pub sides: Sides,
    pub view_box: Rect,
    pub clip: ClipRegion,
}

/// Compute the bounding box and clip region for a set of widths.
///
/// Pure: identical inputs always give bit-identical output.
#[must_use]
pub fn compute_viewbox(widths: &StripeWidths, expansion: &ExpansionSpec, shape: ClipShape) -> Mat {
    let sides = expansion.resolve();

    // All stripe edges sit at 45°, so cos and sin are interchangeable here.
    let radius = FRAC_PI_4.cos() * widths.visible_total();
    let diameter = 2.0 * radius;

    let view_box = Rect {
        x: -radius - diameter * sides.left,
        y: -radius - diameter * sides.top,
        width: diameter * (1.0 + sides.left + sides.right),
        height: diameter * (1.0 + sides.top + sides.bottom),
    };

    let clip = match shape {
        ClipShape::Rect => ClipRegion::Rect(view_box),
        ClipShape::Ellipse => ClipRegion::Ellipse(Ellipse::inscribed(&view_box)),
    };

    debug!(radius, diameter, %view_box, %shape, "computed viewbox");

    Mat {
        radius,
        diameter,
        sides,
        view_box,
        clip,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fibonacci_radius() {
        let mat = compute_viewbox(
            &StripeWidths::fibonacci(),
            &ExpansionSpec::none(),
            ClipShape::Rect,
        );
        assert!(approx(mat.radius, 7.778_174_593_052_023));
        assert!(approx(mat.diameter, 15.556_349_186_104_045));
    }

    #[test]
    fn unexpanded_box_is_centered_square() {
        let mat = compute_viewbox(
            &StripeWidths::fibonacci(),
            &ExpansionSpec::none(),
            ClipShape::Rect,
        );
        assert_eq!(
            mat.view_box.to_array(),
            [-mat.radius, -mat.radius, mat.diameter, mat.diameter]
        );
        assert_eq!(mat.clip, ClipRegion::Rect(mat.view_box));
    }

    #[test]
    fn widths_past_fourth_ignored() {
        let short = StripeWidths::new(vec![1.0, 2.0, 3.0, 5.0]).unwrap();
        let long = StripeWidths::new(vec![1.0, 2.0, 3.0, 5.0, 8.0, 13.0]).unwrap();
        let a = compute_viewbox(&short, &ExpansionSpec::none(), ClipShape::Rect);
        let b = compute_viewbox(&long, &ExpansionSpec::none(), ClipShape::Rect);
        assert_eq!(a.view_box, b.view_box);
    }

    #[test]
    fn short_widths_tolerated() {
        let w = StripeWidths::new(vec![2.0]).unwrap();
        let mat = compute_viewbox(&w, &ExpansionSpec::none(), ClipShape::Rect);
        assert!(approx(mat.radius, 2.0 * FRAC_PI_4.cos()));
    }

    #[test]
    fn asymmetric_expansion() {
        let spec = ExpansionSpec {
            expand_left: Some(2.0),
            expand_top: Some(1.5),
            ..ExpansionSpec::none()
        };
        let mat = compute_viewbox(&StripeWidths::fibonacci(), &spec, ClipShape::Rect);
        let (r, d) = (mat.radius, mat.diameter);
        assert!(approx(mat.view_box.x, -r - d));
        assert!(approx(mat.view_box.y, -r - d * 0.5));
        assert!(approx(mat.view_box.width, d * 2.0));
        assert!(approx(mat.view_box.height, d * 1.5));
    }

    #[test]
    fn ellipse_matches_box_center() {
        let spec = ExpansionSpec {
            expand_right: Some(3.0),
            expand_vertical: Some(1.2),
            ..ExpansionSpec::none()
        };
        let widths = StripeWidths::fibonacci();
        let rect = compute_viewbox(&widths, &spec, ClipShape::Rect);
        let ellipse = compute_viewbox(&widths, &spec, ClipShape::Ellipse);
        assert_eq!(rect.view_box, ellipse.view_box);
        assert_eq!(ellipse.clip.center(), rect.clip.center());
        match ellipse.clip {
            ClipRegion::Ellipse(e) => {
                assert_eq!(e.rx, rect.view_box.width / 2.0);
                assert_eq!(e.ry, rect.view_box.height / 2.0);
            }
            ClipRegion::Rect(_) => panic!("expected an ellipse clip"),
        }
    }

    #[test]
    fn idempotent() {
        let spec = ExpansionSpec::circumscribed();
        let widths = StripeWidths::golden(5).unwrap();
        let a = compute_viewbox(&widths, &spec, ClipShape::Ellipse);
        let b = compute_viewbox(&widths, &spec, ClipShape::Ellipse);
        assert_eq!(a.view_box.to_array().map(f64::to_bits), b.view_box.to_array().map(f64::to_bits));
        assert_eq!(a, b);
    }

    #[test]
    fn view_box_display() {
        let r = Rect::new(-1.5, -2.0, 3.0, 4.25);
        assert_eq!(r.to_string(), "-1.5 -2 3 4.25");
    }

    #[test]
    fn shape_parsing() {
        assert_eq!("rect".parse::<ClipShape>(), Ok(ClipShape::Rect));
        assert_eq!("ellipse".parse::<ClipShape>(), Ok(ClipShape::Ellipse));
        assert_eq!(
            "circle".parse::<ClipShape>(),
            Err(GeometryError::UnknownShape("circle".into()))
        );
        assert_eq!(ClipShape::Ellipse.to_string(), "ellipse");
    }
}
