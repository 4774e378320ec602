use std::borrow::Cow;

use palette::{LinSrgb, Srgb};

use crate::error::PaletteError;

/// sRGB color with u8 components, parsed from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_digit(hi), hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi * 16 + lo),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` string. Hex digits may be either case.
    ///
    /// Usable in const context so the built-in table is checked at compile time.
    pub const fn parse_hex(hex: &str) -> Option<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return None;
        }
        match (
            hex_pair(bytes[1], bytes[2]),
            hex_pair(bytes[3], bytes[4]),
            hex_pair(bytes[5], bytes[6]),
        ) {
            (Some(r), Some(g), Some(b)) => Some(Self { r, g, b }),
            _ => None,
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        Self::parse_hex(hex).ok_or_else(|| PaletteError::InvalidHex(hex.to_string()))
    }

    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    pub fn to_rgb_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    /// WCAG 2.0 relative luminance, computed from linearized sRGB.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb<f32> = self.to_srgb_u8().into_format::<f32>().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn label_color(self) -> Color {
        if self.relative_luminance() > 0.4 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

/// Uppercase `#RRGGBB`.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Whether `s` is a well-formed `#RRGGBB` color string.
pub fn is_valid_hex(s: &str) -> bool {
    Color::parse_hex(s).is_some()
}

/// A named color. The hex string is kept exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    name: Cow<'static, str>,
    hex: Cow<'static, str>,
    color: Color,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Result<Self, PaletteError> {
        let hex = hex.into();
        let color = Color::from_hex(&hex)?;
        Ok(Self {
            name: Cow::Owned(name.into()),
            hex: Cow::Owned(hex),
            color,
        })
    }

    /// Entry for a compiled-in table. Panics during const evaluation on a bad hex.
    pub const fn builtin(name: &'static str, hex: &'static str) -> Self {
        let color = match Color::parse_hex(hex) {
            Some(color) => color,
            None => panic!("built-in color has an invalid hex code"),
        };
        Self {
            name: Cow::Borrowed(name),
            hex: Cow::Borrowed(hex),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl std::fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.hex)
    }
}
