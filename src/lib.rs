pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod session;
pub mod tui;

pub use color::{Color, ColorEntry};
pub use error::PaletteError;
pub use session::Session;
