//! # pw-palette — palettes and style cycles for the pinwheel logo
//!
//! A palette is a short ordered list of colors. Rendering walks it with two
//! nested counters:
//!
//! ```text
//! Palette colors [A, B, …]
//!     │
//!     ▼
//! cycle.rs:   ColorCycle  A, B, A, B, …            (index mod len)
//!     │
//!     ▼
//! cycle.rs:   StyleCycle  fill, ·, ·, ·, fill, fill (6-step period)
//!     │
//!     ▼
//! one StyleFrame per stripe rect, in draw order
//! ```
//!
//! Named palettes live in a read-only [`PaletteTable`] built once per
//! process ([`builtin`]). Every render takes a fresh cycle from
//! [`Palette::style_cycle`]; cycles are never shared between renders.

pub mod builtin;
pub mod cycle;
pub mod palette;

use thiserror::Error;

pub use builtin::{PaletteTable, builtin_names, builtin_palette};
pub use cycle::{ColorCycle, STYLE_PERIOD, StyleCycle, StyleFrame};
pub use palette::Palette;

/// Errors raised by palette lookup and cycle construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A palette or color cycle with no colors.
    #[error("palette has no colors")]
    EmptyPalette,

    /// No palette registered under this name.
    #[error("unknown palette `{0}`")]
    PaletteNotFound(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, PaletteError>;
