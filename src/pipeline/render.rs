use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale};
use chrono::{DateTime, Local};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::color::ColorEntry;
use crate::error::PaletteError;

pub const SWATCH_WIDTH: u32 = 150;
pub const SWATCH_HEIGHT: u32 = 150;
pub const CANVAS_HEIGHT: u32 = 200;
pub const NAME_OFFSET: (i32, i32) = (10, 155);
pub const HEX_OFFSET: (i32, i32) = (10, 170);
pub const FONT_SIZE: f32 = 14.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT: Rgb<u8> = Rgb([0, 0, 0]);

/// Places a sans-serif font usually lives. Relative entries resolve against the cwd.
const SYSTEM_FONTS: &[&str] = &[
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font used for swatch labels.
pub enum LabelFont {
    Outline(FontVec),
    /// 8x8 bitmap glyphs compiled into the binary.
    Bitmap,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Outline(_) => f.write_str("LabelFont::Outline"),
            LabelFont::Bitmap => f.write_str("LabelFont::Bitmap"),
        }
    }
}

impl LabelFont {
    /// Load a TrueType/OpenType font from `path`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let bytes = std::fs::read(path).ok()?;
        FontVec::try_from_vec(bytes).ok().map(LabelFont::Outline)
    }

    /// Use `preferred` if it loads, else the first system font found, else the bitmap font.
    pub fn discover(preferred: Option<&Path>) -> Self {
        if let Some(path) = preferred {
            match Self::from_file(path) {
                Some(font) => return font,
                None => tracing::warn!(
                    path = %path.display(),
                    "could not load font, searching system fonts"
                ),
            }
        }
        for candidate in SYSTEM_FONTS {
            if let Some(font) = Self::from_file(Path::new(candidate)) {
                tracing::debug!(font = candidate, "using system font");
                return font;
            }
        }
        tracing::warn!("no system font available, using built-in bitmap font");
        LabelFont::Bitmap
    }

    fn draw(&self, image: &mut RgbImage, x: i32, y: i32, text: &str) {
        match self {
            LabelFont::Outline(font) => {
                draw_text_mut(image, TEXT, x, y, em_scale(font), font, text)
            }
            LabelFont::Bitmap => draw_bitmap_text(image, x, y, text),
        }
    }
}

/// Scale that makes the font's em `FONT_SIZE` pixels tall.
///
/// `PxScale` measures ascent to descent, which is larger than the em for most fonts.
fn em_scale(font: &FontVec) -> PxScale {
    match font.units_per_em() {
        Some(units) if units > 0.0 => PxScale::from(FONT_SIZE * font.height_unscaled() / units),
        _ => PxScale::from(FONT_SIZE),
    }
}

fn draw_bitmap_text(image: &mut RgbImage, x: i32, y: i32, text: &str) {
    let fallback = BASIC_FONTS.get('?').unwrap_or_default();
    for (i, c) in text.chars().enumerate() {
        let glyph = BASIC_FONTS.get(c).unwrap_or(fallback);
        let origin_x = x + 8 * i as i32;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let (px, py) = (origin_x + col, y + row as i32);
                if px >= 0 && py >= 0 && (px as u32) < image.width() && (py as u32) < image.height() {
                    image.put_pixel(px as u32, py as u32, TEXT);
                }
            }
        }
    }
}

/// `palette_YYYYMMDD_HHMMSS.png` for the given moment.
pub fn export_filename(at: DateTime<Local>) -> String {
    format!("palette_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// Draws palettes as a row of labeled swatches.
#[derive(Debug)]
pub struct SwatchRenderer {
    font: LabelFont,
}

impl Default for SwatchRenderer {
    fn default() -> Self {
        Self::new(LabelFont::discover(None))
    }
}

impl SwatchRenderer {
    pub fn new(font: LabelFont) -> Self {
        Self { font }
    }

    /// White canvas, one 150px-wide swatch per entry with name and hex below.
    pub fn render(&self, palette: &[ColorEntry]) -> RgbImage {
        let width = SWATCH_WIDTH * palette.len() as u32;
        let mut image = RgbImage::from_pixel(width, CANVAS_HEIGHT, BACKGROUND);

        for (i, entry) in palette.iter().enumerate() {
            let x = (SWATCH_WIDTH * i as u32) as i32;
            // Edges are inclusive, so each swatch also covers the next one's first column.
            let rect = Rect::at(x, 0).of_size(SWATCH_WIDTH + 1, SWATCH_HEIGHT + 1);
            draw_filled_rect_mut(&mut image, rect, entry.color().to_rgb_pixel());
            self.font
                .draw(&mut image, x + NAME_OFFSET.0, NAME_OFFSET.1, entry.name());
            self.font
                .draw(&mut image, x + HEX_OFFSET.0, HEX_OFFSET.1, entry.hex());
        }

        tracing::debug!(swatches = palette.len(), width, "rendered swatch sheet");
        image
    }

    /// Render `palette` and write it as a timestamped PNG inside `dir`.
    ///
    /// A file from an earlier export in the same second is overwritten.
    pub fn export(&self, palette: &[ColorEntry], dir: &Path) -> Result<PathBuf, PaletteError> {
        let path = dir.join(export_filename(Local::now()));
        self.render(palette)
            .save(&path)
            .map_err(|source| PaletteError::Export {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), "exported palette image");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use chrono::TimeZone;

    fn pixel_color(image: &RgbImage, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        Color::new(r, g, b)
    }

    /// Rows holding pixels darker than mid-gray, across the whole image.
    fn ink_rows(image: &RgbImage) -> Vec<u32> {
        (0..image.height())
            .filter(|&y| {
                (0..image.width()).any(|x| image.get_pixel(x, y).0.iter().all(|&c| c < 128))
            })
            .collect()
    }

    fn entry(name: &str, hex: &str) -> ColorEntry {
        ColorEntry::new(name, hex).unwrap()
    }

    fn renderer() -> SwatchRenderer {
        SwatchRenderer::new(LabelFont::Bitmap)
    }

    #[test]
    fn two_swatches_fill_their_columns() {
        let image = renderer().render(&[entry("A", "#FF0000"), entry("B", "#00FF00")]);
        assert_eq!(image.dimensions(), (300, 200));
        assert_eq!(pixel_color(&image, 75, 75), Color::new(255, 0, 0));
        assert_eq!(pixel_color(&image, 225, 75), Color::new(0, 255, 0));
    }

    #[test]
    fn swatch_edges_are_inclusive() {
        let image = renderer().render(&[entry("A", "#FF0000"), entry("B", "#0000FF")]);
        assert_eq!(pixel_color(&image, 149, 150), Color::new(255, 0, 0));
        // Second swatch is drawn last and owns the shared column.
        assert_eq!(pixel_color(&image, 150, 0), Color::new(0, 0, 255));
        assert_eq!(pixel_color(&image, 299, 150), Color::new(0, 0, 255));
        assert_eq!(pixel_color(&image, 75, 151), Color::WHITE);
    }

    #[test]
    fn background_is_white_below_swatches() {
        let image = renderer().render(&[entry("A", "#123456")]);
        assert_eq!(pixel_color(&image, 149, 199), Color::WHITE);
        assert_eq!(pixel_color(&image, 0, 152), Color::WHITE);
    }

    #[test]
    fn labels_are_drawn_in_black() {
        let image = renderer().render(&[entry("HHHH", "#FFFFFF")]);
        let label_area = (10..50).flat_map(|x| (155..163).map(move |y| (x, y)));
        let black = label_area
            .filter(|&(x, y)| pixel_color(&image, x, y) == Color::BLACK)
            .count();
        assert!(black > 0, "expected name label pixels");
        let hex_area = (10..70).flat_map(|x| (170..178).map(move |y| (x, y)));
        assert!(hex_area
            .into_iter()
            .any(|(x, y)| pixel_color(&image, x, y) == Color::BLACK));
    }

    #[test]
    fn long_labels_are_clipped() {
        let name = "An Extremely Long Color Name That Overflows";
        let image = renderer().render(&[entry(name, "#00FFFF")]);
        assert_eq!(image.width(), 150);
    }

    #[test]
    fn empty_palette_renders_zero_width_canvas() {
        let image = renderer().render(&[]);
        assert_eq!(image.dimensions(), (0, 200));
    }

    #[test]
    fn seven_swatches() {
        let palette: Vec<_> = (0..7)
            .map(|i| entry(&format!("C{i}"), &format!("#{:02X}0000", i * 30)))
            .collect();
        let image = renderer().render(&palette);
        assert_eq!(image.width(), 1050);
        assert_eq!(pixel_color(&image, 6 * 150 + 75, 75), Color::new(180, 0, 0));
    }

    #[test]
    fn filename_uses_local_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(export_filename(at), "palette_20240309_070502.png");
    }

    #[test]
    fn missing_font_falls_back() {
        let font = LabelFont::discover(Some(Path::new("/nonexistent/font.ttf")));
        // Whatever was found, rendering must still succeed.
        let image = SwatchRenderer::new(font).render(&[entry("A", "#FF0000")]);
        assert_eq!(image.dimensions(), (150, 200));
    }

    #[test]
    fn outline_labels_sit_below_swatch() {
        let font = LabelFont::discover(None);
        if matches!(font, LabelFont::Bitmap) {
            return;
        }
        let image = SwatchRenderer::new(font).render(&[entry("Hg", "#FFFFFF")]);
        let rows = ink_rows(&image);
        assert!(!rows.is_empty(), "no label pixels drawn");
        assert!(rows.iter().all(|&y| y > 151), "label ink above swatch: {rows:?}");
        assert!(rows.iter().any(|&y| (155..170).contains(&y)), "name row missing: {rows:?}");
        assert!(rows.iter().any(|&y| (170..=185).contains(&y)), "hex row missing: {rows:?}");
    }

    #[test]
    fn outline_font_is_scaled_by_em() {
        let LabelFont::Outline(font) = LabelFont::discover(None) else {
            return;
        };
        let scale = em_scale(&font);
        let units = font.units_per_em().unwrap();
        let em_px = scale.y * units / font.height_unscaled();
        assert!((em_px - FONT_SIZE).abs() < 0.01, "em is {em_px}px");
        assert!(scale.y >= FONT_SIZE);
    }

    #[test]
    fn bitmap_labels_sit_below_swatch() {
        let image = renderer().render(&[entry("Hg", "#FFFFFF")]);
        let rows = ink_rows(&image);
        assert_eq!(rows.first(), Some(&155));
        assert!(rows.iter().all(|&y| y < 178));
    }

    #[test]
    fn non_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(LabelFont::from_file(&path).is_none());
    }

    #[test]
    fn export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = renderer()
            .export(&[entry("A", "#FF0000")], dir.path())
            .unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("palette_") && name.ends_with(".png"));
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (150, 200));
        assert_eq!(pixel_color(&decoded, 75, 75), Color::new(255, 0, 0));
    }

    #[test]
    fn export_into_missing_dir_fails() {
        let err = renderer()
            .export(&[entry("A", "#FF0000")], Path::new("/nonexistent/out"))
            .unwrap_err();
        assert!(matches!(err, PaletteError::Export { .. }));
    }
}
