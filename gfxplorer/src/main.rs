//! Dump tool for GFX bitmap font headers.
//!
//! Loads a header, filters it to the requested code points, and prints
//! the typeface metrics and glyph table, optionally rendering each
//! glyph's bitmap as ASCII art.

use clap::Parser;
use read_gfx::{parse_code_points, CodePointSet, Glyph, ParseError, Typeface};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input font header.
    path: std::path::PathBuf,

    /// List of unicode codepoints or ranges as hex numbers, e.g.
    /// 41-5a,61-7a. '*' or omitted keeps every declared glyph.
    #[arg(short, long)]
    unicodes: Option<String>,

    /// Print the per-glyph metric table.
    #[arg(long)]
    glyphs: bool,

    /// Render each glyph bitmap as ASCII art.
    #[arg(long)]
    render: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ParseError> {
    let accepted = match args.unicodes.as_deref() {
        Some(list) => parse_code_points(list)?,
        None => CodePointSet::all(),
    };
    let face = Typeface::load(&args.path, &accepted)?;
    log::debug!("loaded {} from {}", face.name, args.path.display());
    println!(
        "{}: {} glyphs, y-advance {}, descent {}",
        face.name,
        face.glyphs.len(),
        face.y_advance,
        face.descent
    );
    if args.glyphs || args.render {
        for glyph in &face.glyphs {
            print_glyph(glyph, args.render);
        }
    }
    Ok(())
}

fn print_glyph(glyph: &Glyph, render: bool) {
    let ch = char::from_u32(glyph.code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
    println!(
        "U+{:04X} {:?} {}x{} advance {} offset ({}, {})",
        glyph.code_point,
        ch,
        glyph.width,
        glyph.height,
        glyph.x_advance,
        glyph.x_offset,
        glyph.y_offset
    );
    if render {
        for y in 0..glyph.height {
            let row: String = (0..glyph.width)
                .map(|x| if glyph.pixel(x, y) { '#' } else { '.' })
                .collect();
            println!("  {row}");
        }
    }
}
