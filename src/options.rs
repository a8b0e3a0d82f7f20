//! Command-line options.
//!
//! # Supported syntax
//!
//! | Flag                     | Effect                                   |
//! |--------------------------|------------------------------------------|
//! | `--palette NAME`         | Use a builtin palette                    |
//! | `--colors C1,C2,…`       | Use these colors (hex or names) instead  |
//! | `--shape rect\|ellipse`  | Clip shape                               |
//! | `--widths W1,W2,…`       | Stripe widths, innermost first           |
//! | `--golden N`             | `N` widths growing by the golden ratio   |
//! | `--expand KEY=VALUE`     | One expansion multiplier (repeatable)    |
//! | `--circumscribe`         | Global expansion of `sec(π/4)`           |
//! | `--format svg\|json`     | Output format                            |
//! | `--compact`              | Single-line output                       |
//! | `--output PATH`, `-o`    | Write to a file instead of stdout        |
//! | `--list-palettes`        | Print palette names and exit             |
//! | `--help`, `-h`           | Print usage and exit                     |
//!
//! # Expansion keys
//!
//! | Key                | Fallback for        |
//! |--------------------|---------------------|
//! | `expandTop`        |                     |
//! | `expandBottom`     |                     |
//! | `expandLeft`       |                     |
//! | `expandRight`      |                     |
//! | `expandVertical`   | top, bottom         |
//! | `expandHorizontal` | left, right         |
//! | `expand`           | everything          |

use std::path::PathBuf;
use std::sync::LazyLock;

use pw_color::{Color, ColorError};
use pw_geometry::{ClipShape, ExpansionSpec, GeometryError, StripeWidths};
use pw_palette::{Palette, PaletteError, PaletteTable};
use regex::Regex;
use thiserror::Error;

/// Palette used when neither `--palette` nor `PINWHEEL_PALETTE` is set.
pub const DEFAULT_PALETTE: &str = "black";

/// Name given to a palette built from `--colors` without `--palette`.
pub const CUSTOM_PALETTE: &str = "custom";

pub const USAGE: &str = "\
usage: pinwheel [options]

  --palette NAME         builtin palette (default: $PINWHEEL_PALETTE or black)
  --colors C1,C2,...     custom palette colors, hex or names
  --shape rect|ellipse   clip shape (default: rect)
  --widths W1,W2,...     stripe widths, innermost first (default: 1,2,3,5,8)
  --golden N             N widths growing by the golden ratio
  --expand KEY=VALUE     expansion multiplier, e.g. expandTop=1.5 (repeatable)
  --circumscribe         global expansion of sec(pi/4)
  --format svg|json      output format (default: svg)
  --compact              single-line output
  -o, --output PATH      write to PATH instead of stdout
  --list-palettes        list builtin palettes and exit
  -h, --help             show this help

  PINWHEEL_LOG sets the log filter (default: warn).";

static EXPAND_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(expand(?:Top|Bottom|Left|Right|Vertical|Horizontal)?)=([0-9]+(?:\.[0-9]*)?|\.[0-9]+)$")
        .expect("expansion directive pattern is valid")
});

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),

    #[error("invalid expansion `{0}` (expected KEY=NUMBER, e.g. expandTop=1.5)")]
    BadDirective(String),

    #[error("invalid number `{value}` for `{flag}`")]
    BadNumber { flag: &'static str, value: String },

    #[error("unknown format `{0}` (expected `svg` or `json`)")]
    UnknownFormat(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Svg,
    Json,
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub palette: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub shape: ClipShape,
    pub widths: StripeWidths,
    pub expansion: ExpansionSpec,
    pub format: Format,
    pub compact: bool,
    pub output: Option<PathBuf>,
    pub list_palettes: bool,
    pub help: bool,
}

impl Options {
    /// Pick the palette to draw with.
    ///
    /// `--colors` wins and builds a one-off palette. Otherwise the name
    /// comes from `--palette`, then `env_default`, then [`DEFAULT_PALETTE`].
    ///
    /// # Errors
    ///
    /// [`PaletteError::PaletteNotFound`] for an unknown name.
    pub fn resolve_palette(
        &self,
        table: &PaletteTable,
        env_default: Option<&str>,
    ) -> Result<Palette, PaletteError> {
        if let Some(colors) = &self.colors {
            let name = self.palette.as_deref().unwrap_or(CUSTOM_PALETTE);
            return Palette::from_colors(name, colors);
        }
        let name = self
            .palette
            .as_deref()
            .or(env_default)
            .unwrap_or(DEFAULT_PALETTE);
        table.get(name).cloned()
    }
}

/// Parse arguments (without the program name).
///
/// # Errors
///
/// Returns the first malformed or unknown option.
pub fn parse_args<I>(args: I) -> Result<Options, OptionsError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &'static str| args.next().ok_or(OptionsError::MissingValue(flag));
        match arg.as_str() {
            "--palette" => opts.palette = Some(value("--palette")?),
            "--colors" => opts.colors = Some(parse_colors(&value("--colors")?)?),
            "--shape" => opts.shape = value("--shape")?.parse()?,
            "--widths" => opts.widths = parse_widths(&value("--widths")?)?,
            "--golden" => {
                let raw = value("--golden")?;
                let limit = raw.parse::<usize>().map_err(|_| OptionsError::BadNumber {
                    flag: "--golden",
                    value: raw.clone(),
                })?;
                opts.widths = StripeWidths::golden(limit)?;
            }
            "--expand" => {
                let (key, factor) = parse_expand_directive(&value("--expand")?)?;
                opts.expansion.set(&key, factor);
            }
            "--circumscribe" => opts.expansion.expand = ExpansionSpec::circumscribed().expand,
            "--format" => opts.format = parse_format(&value("--format")?)?,
            "--compact" => opts.compact = true,
            "-o" | "--output" => opts.output = Some(PathBuf::from(value("--output")?)),
            "--list-palettes" => opts.list_palettes = true,
            "-h" | "--help" => opts.help = true,
            _ => return Err(OptionsError::UnknownFlag(arg)),
        }
    }

    Ok(opts)
}

/// Parse one `KEY=VALUE` expansion directive.
///
/// # Errors
///
/// [`OptionsError::BadDirective`] if the key is unknown or the value is
/// not a non-negative decimal number.
pub fn parse_expand_directive(arg: &str) -> Result<(String, f64), OptionsError> {
    let bad = || OptionsError::BadDirective(arg.to_string());
    let caps = EXPAND_DIRECTIVE.captures(arg.trim()).ok_or_else(bad)?;
    let factor = caps[2].parse::<f64>().map_err(|_| bad())?;
    Ok((caps[1].to_string(), factor))
}

/// Parse a comma-separated width list.
///
/// # Errors
///
/// [`OptionsError::BadNumber`] for a non-numeric entry, or a geometry
/// error if the list is empty or has a non-positive width.
pub fn parse_widths(s: &str) -> Result<StripeWidths, OptionsError> {
    let widths = split_list(s)
        .map(|w| {
            w.parse::<f64>().map_err(|_| OptionsError::BadNumber {
                flag: "--widths",
                value: w.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(StripeWidths::new(widths)?)
}

/// Parse a comma-separated color list.
///
/// # Errors
///
/// The first color that fails to parse.
pub fn parse_colors(s: &str) -> Result<Vec<Color>, OptionsError> {
    Ok(split_list(s).map(Color::parse).collect::<Result<Vec<_>, _>>()?)
}

fn parse_format(s: &str) -> Result<Format, OptionsError> {
    match s {
        "svg" => Ok(Format::Svg),
        "json" => Ok(Format::Json),
        _ => Err(OptionsError::UnknownFormat(s.to_string())),
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
