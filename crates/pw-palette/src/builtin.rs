//! Named palettes: the process-wide, read-only table.
//!
//! The builtin table is built once on first use and never mutated. Callers
//! that need extra palettes (e.g. colors given on the command line) take a
//! copy with [`PaletteTable::with_palette`] instead of touching the shared
//! table.

use std::sync::LazyLock;

use pw_color::Color;
use tracing::debug;

use crate::palette::Palette;
use crate::{PaletteError, Result};

/// A lookup table of palettes keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

static BUILTIN: LazyLock<PaletteTable> = LazyLock::new(|| {
    let palettes = [
        ("black", vec![("black", Color::BLACK)]),
        (
            "patreon",
            vec![
                ("orange", Color::rgb8(0xE7, 0x47, 0x1E)),
                ("coral", Color::rgb8(0xF9, 0x68, 0x54)),
                ("navy", Color::rgb8(0x05, 0x2D, 0x49)),
            ],
        ),
        ("leap", vec![("green", Color::rgb8(0x5D, 0xAA, 0x00))]),
        ("looker", vec![("purple", Color::rgb8(0x5A, 0x2F, 0xC2))]),
    ];
    PaletteTable {
        palettes: palettes
            .into_iter()
            .map(|(name, swatches)| {
                Palette::new(name, swatches).expect("builtin palettes have at least one color")
            })
            .collect(),
    }
});

impl PaletteTable {
    /// The builtin palettes.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Look up a palette by exact name.
    ///
    /// # Errors
    ///
    /// [`PaletteError::PaletteNotFound`] for an unknown name.
    pub fn get(&self, name: &str) -> Result<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| PaletteError::PaletteNotFound(name.to_string()))
    }

    /// Palette names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(Palette::name)
    }

    /// All palettes in registration order.
    #[must_use]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// A copy of this table with `palette` added, replacing any palette of
    /// the same name.
    #[must_use]
    pub fn with_palette(&self, palette: Palette) -> Self {
        let mut palettes = self.palettes.clone();
        if let Some(slot) = palettes.iter_mut().find(|p| p.name() == palette.name()) {
            debug!(name = palette.name(), "overriding palette");
            *slot = palette;
        } else {
            palettes.push(palette);
        }
        Self { palettes }
    }
}

/// Look up a builtin palette by name.
///
/// # Errors
///
/// [`PaletteError::PaletteNotFound`] if the name is not recognized.
pub fn builtin_palette(name: &str) -> Result<&'static Palette> {
    PaletteTable::builtin().get(name)
}

/// List all builtin palette names, in registration order.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    PaletteTable::builtin().names().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::StyleFrame;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_palette(name).is_ok(), "Builtin '{name}' missing");
        }
    }

    #[test]
    fn every_builtin_registered() {
        assert_eq!(builtin_names(), ["black", "patreon", "leap", "looker"]);
    }

    #[test]
    fn unknown_is_not_found() {
        assert_eq!(
            builtin_palette("nonexistent"),
            Err(PaletteError::PaletteNotFound("nonexistent".into()))
        );
    }

    #[test]
    fn leap_is_green() {
        let p = builtin_palette("leap").unwrap();
        assert_eq!(p.colors(), vec![Color::hex("#5DAA00").unwrap()]);
        assert_eq!(p.swatches()[0].role, "green");
    }

    #[test]
    fn patreon_has_three_colors_in_order() {
        let p = builtin_palette("patreon").unwrap();
        let hex: Vec<String> = p.colors().into_iter().map(Color::to_hex).collect();
        assert_eq!(hex, ["#e7471e", "#f96854", "#052d49"]);
    }

    #[test]
    fn black_cycle_starts_filled() {
        let mut styles = builtin_palette("black").unwrap().style_cycle();
        assert_eq!(styles.next_style(), StyleFrame::Fill(Color::BLACK));
        assert_eq!(styles.next_style(), StyleFrame::Hidden);
    }

    #[test]
    fn with_palette_adds_without_touching_builtin() {
        let custom = Palette::from_colors("mono", &[Color::WHITE]).unwrap();
        let table = PaletteTable::builtin().with_palette(custom);
        assert!(table.get("mono").is_ok());
        assert!(PaletteTable::builtin().get("mono").is_err());
        assert_eq!(table.palettes().len(), builtin_names().len() + 1);
    }

    #[test]
    fn with_palette_overrides_same_name() {
        let custom = Palette::from_colors("leap", &[Color::WHITE]).unwrap();
        let table = PaletteTable::builtin().with_palette(custom);
        assert_eq!(table.get("leap").unwrap().colors(), vec![Color::WHITE]);
        assert_eq!(table.palettes().len(), builtin_names().len());
    }
}
