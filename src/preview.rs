use std::io::Write;

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::{Color, ColorEntry};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Print one truecolor block per entry, each followed by its name and hex code.
pub fn print_palette<W: Write>(out: &mut W, palette: &[ColorEntry]) -> std::io::Result<()> {
    let name_width = palette
        .iter()
        .map(|e| e.name().chars().count())
        .max()
        .unwrap_or(0);
    for entry in palette {
        let color = entry.color();
        let block = format!(" {} ", entry.hex())
            .with(term_color(color.label_color()))
            .on(term_color(color));
        writeln!(
            out,
            "  {block}  {:<name_width$}",
            entry.name(),
            name_width = name_width
        )?;
    }
    Ok(())
}

/// Plain listing of an active set, one `Name,#RRGGBB` per line.
pub fn print_listing<W: Write>(out: &mut W, entries: &[ColorEntry]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(out, "{},{}", entry.name(), entry.hex())?;
    }
    Ok(())
}
