use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::sample::{DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
use crate::pipeline::source::SelectionMode;

/// Sample random hyperpop color palettes and export them as swatch images.
#[derive(Parser, Debug)]
#[command(name = "hyperpop", version, about)]
pub struct Args {
    /// Palette file(s) with one `Name,#RRGGBB` per line, loaded in order
    #[arg(short, long = "load", value_name = "FILE")]
    pub load: Vec<PathBuf>,

    /// Number of colors to sample
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = parse_count,
    )]
    pub count: usize,

    /// Which colors to sample from
    #[arg(short, long, value_enum, default_value_t = SelectionMode::BuiltinOnly)]
    pub mode: SelectionMode,

    /// Save the sampled palette as a PNG swatch sheet
    #[arg(short, long)]
    pub export: bool,

    /// Directory exported images are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// TrueType/OpenType font for image labels (system font if omitted)
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the active color set instead of sampling
    #[arg(long, conflicts_with_all = ["export", "tui"])]
    pub list: bool,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!("must be between {MIN_COUNT} and {MAX_COUNT}"))
    }
}
