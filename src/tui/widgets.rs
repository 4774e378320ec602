use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::{Color as AppColor, ColorEntry};

/// Terminal columns per swatch.
const SWATCH_COLS: usize = 18;
/// Rows of solid color above the labels.
const SWATCH_ROWS: usize = 4;

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Truncate or pad `text` to exactly `width` columns, centered.
fn fit(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:^width$}")
}

/// A widget that draws a sampled palette as a row of colored blocks, each
/// labeled with its name and hex code.
pub struct PaletteWidget<'a> {
    palette: &'a [ColorEntry],
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a [ColorEntry]) -> Self {
        Self { palette }
    }
}

fn build_block_row(palette: &[ColorEntry]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for entry in palette {
        spans.push(Span::styled(
            " ".repeat(SWATCH_COLS),
            Style::default().bg(to_color(entry.color())),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Label row drawn on the swatch itself, in black or white for readability.
fn build_label_row(palette: &[ColorEntry], label: fn(&ColorEntry) -> &str) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for entry in palette {
        let color = entry.color();
        let style = Style::default()
            .bg(to_color(color))
            .fg(to_color(color.label_color()));
        spans.push(Span::styled(fit(label(entry), SWATCH_COLS), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.palette.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "  Press g to generate a palette",
                Style::default().fg(Color::DarkGray),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines = vec![Line::from("")];
        for _ in 0..SWATCH_ROWS {
            lines.push(build_block_row(self.palette));
        }
        lines.push(build_label_row(self.palette, ColorEntry::name));
        lines.push(build_label_row(self.palette, ColorEntry::hex));
        lines.push(build_block_row(self.palette));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Count, mode and pool sizes, plus the key bindings.
pub struct ControlsWidget<'a> {
    pub count: usize,
    pub mode: &'a str,
    pub builtin: usize,
    pub loaded: usize,
}

impl Widget for ControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Controls");
        let inner = block.inner(area);
        block.render(area, buf);

        let value = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::raw("  Colors: "),
                Span::styled(self.count.to_string(), value),
                Span::raw("   Source: "),
                Span::styled(self.mode.to_string(), value),
                Span::raw(format!(
                    "   ({} built-in, {} loaded)",
                    self.builtin, self.loaded
                )),
            ]),
            Line::from(Span::styled(
                "  +/- count  m mode  g generate  s save  l load  q quit",
                hint,
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
