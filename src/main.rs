use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

use hyperpop::cli::Args;
use hyperpop::pipeline::render::{LabelFont, SwatchRenderer};
use hyperpop::pipeline::source::PaletteSource;
use hyperpop::tui::{self, TuiApp};
use hyperpop::{preview, Session};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log lines would tear the alternate screen, so the TUI only logs on request.
    if !args.tui || std::env::var_os("RUST_LOG").is_some() {
        init_tracing(args.verbose);
    }

    let renderer = SwatchRenderer::new(LabelFont::discover(args.font.as_deref()));
    let mut session = Session::new(PaletteSource::new(), renderer);
    for path in &args.load {
        session
            .load_file(path)
            .with_context(|| format!("failed to load palette {}", path.display()))?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    };

    if args.tui {
        let mut app = TuiApp::new(session, args.mode, args.count, args.out_dir, rng);
        return tui::run(&mut app);
    }

    let mut stdout = std::io::stdout().lock();
    if args.list {
        preview::print_listing(&mut stdout, &session.source().available(args.mode))?;
        return Ok(());
    }

    let palette = session
        .generate(args.mode, args.count, &mut rng)
        .with_context(|| format!("cannot sample {} color(s) from {}", args.count, args.mode))?;
    preview::print_palette(&mut stdout, palette)?;

    if args.export {
        if let Some(path) = session.export_image(&args.out_dir)? {
            writeln!(stdout, "Palette saved as {}", path.display())?;
        }
    }
    Ok(())
}
