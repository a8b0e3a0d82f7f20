// SPDX-License-Identifier: MIT
//
// pinwheel — draws the square-spiral stripe logo.
//
// This is the binary that wires the crates together:
//
//   pw-geometry → widths, expansion, viewBox and clip, stripe rects
//   pw-palette  → builtin palettes, color and style cycles
//   pw-render   → scene composition, SVG and JSON renderers
//
// One run is one pass:
//
//   argv → Options → Logo + Palette → Scene → Renderer → stdout | file
//
// Logging goes to stderr so it never mixes with the rendered document.
// PINWHEEL_LOG takes an EnvFilter directive (`debug`, `pw_geometry=trace`).

mod options;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use pw_palette::{PaletteError, PaletteTable};
use pw_render::{JsonRenderer, Logo, RenderError, Renderer, SvgRenderer};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use options::{Format, Options, USAGE};

const LOG_ENV: &str = "PINWHEEL_LOG";
const PALETTE_ENV: &str = "PINWHEEL_PALETTE";

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render the logo described by `opts` into `out`.
fn render(
    opts: &Options,
    table: &PaletteTable,
    env_palette: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let palette = opts.resolve_palette(table, env_palette)?;
    let logo = Logo::new(opts.widths.clone(), opts.expansion, opts.shape);
    let scene = logo.scene(&palette);
    info!(
        palette = palette.name(),
        shape = %opts.shape,
        stripes = opts.widths.len(),
        "rendering"
    );

    let pretty = !opts.compact;
    match opts.format {
        Format::Svg => SvgRenderer {
            pretty,
            ..SvgRenderer::default()
        }
        .render(&scene, out)?,
        Format::Json => JsonRenderer { pretty }.render(&scene, out)?,
    }
    out.flush()?;
    Ok(())
}

fn list_palettes(table: &PaletteTable, out: &mut dyn Write) -> io::Result<()> {
    for palette in table.palettes() {
        let colors: Vec<String> = palette.colors().iter().map(ToString::to_string).collect();
        writeln!(out, "{:<10} {}", palette.name(), colors.join(" "))?;
    }
    out.flush()
}

fn run(opts: &Options) -> Result<(), Error> {
    let table = PaletteTable::builtin();

    if opts.list_palettes {
        list_palettes(table, &mut io::stdout().lock())?;
        return Ok(());
    }

    let env_palette = env::var(PALETTE_ENV).ok();
    match &opts.output {
        Some(path) => {
            debug!(path = %path.display(), "writing to file");
            let mut file = BufWriter::new(File::create(path)?);
            render(opts, table, env_palette.as_deref(), &mut file)
        }
        None => render(opts, table, env_palette.as_deref(), &mut io::stdout().lock()),
    }
}

fn main() {
    init_logging();

    let opts = options::parse_args(env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("pinwheel: {e}");
        eprintln!();
        eprintln!("{USAGE}");
        process::exit(2);
    });

    if opts.help {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(&opts) {
        eprintln!("pinwheel: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
