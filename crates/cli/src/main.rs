use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use fretboard_core::{DiagramOptions, DiagramState, render_diagram, render_svg};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: fretboard <options.json> [out.svg]");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let opts = DiagramOptions::from_json(&json)?;
    let state = DiagramState::new(opts);

    let commands = render_diagram(&state);
    let svg = render_svg(
        &commands,
        state.opts.width,
        state.opts.height,
        &state.opts.class_name,
    );

    match args.get(2) {
        Some(out) => {
            std::fs::write(out, svg).with_context(|| format!("writing {out}"))?;
        }
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}
