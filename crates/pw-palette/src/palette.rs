//! A named, ordered set of colors.
//!
//! Each color carries a role name (`orange`, `navy`, …) for display; only
//! the order matters to the style cycle.

use pw_color::Color;
use serde::Serialize;

use crate::cycle::{ColorCycle, StyleCycle};
use crate::{PaletteError, Result};

/// One color slot in a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub role: String,
    pub color: Color,
}

/// A non-empty named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    name: String,
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Build a palette from `(role, color)` pairs.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `swatches` is empty.
    pub fn new<R: Into<String>>(
        name: impl Into<String>,
        swatches: impl IntoIterator<Item = (R, Color)>,
    ) -> Result<Self> {
        let swatches: Vec<Swatch> = swatches
            .into_iter()
            .map(|(role, color)| Swatch { role: role.into(), color })
            .collect();
        if swatches.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            name: name.into(),
            swatches,
        })
    }

    /// Build a palette from bare colors; roles are numbered `color1`, `color2`, ….
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn from_colors(name: impl Into<String>, colors: &[Color]) -> Result<Self> {
        Self::new(
            name,
            colors
                .iter()
                .enumerate()
                .map(|(i, &c)| (format!("color{}", i + 1), c)),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Colors in palette order.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    /// A fresh color cycle starting at the first color.
    #[must_use]
    pub fn color_cycle(&self) -> ColorCycle {
        ColorCycle::from_non_empty(self.colors())
    }

    /// A fresh style cycle starting at the beginning of a period.
    #[must_use]
    pub fn style_cycle(&self) -> StyleCycle {
        StyleCycle::new(self.color_cycle())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
