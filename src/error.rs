use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the palette core. None of them leave state half-updated.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// More colors were requested than the active set holds.
    #[error("not enough colors to generate the requested palette: requested {requested}, available {available}")]
    InsufficientColors { requested: usize, available: usize },

    /// A palette file could not be opened or decoded.
    #[error("unable to read palette file {}: {source}", .path.display())]
    UnreadablePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hex color {0:?}: expected #RRGGBB")]
    InvalidHex(String),

    #[error("palette size must be between {min} and {max}, got {count}")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// The swatch sheet could not be encoded or written.
    #[error("failed to export palette image to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
