use std::path::{Path, PathBuf};

use rand::RngExt;

use crate::color::ColorEntry;
use crate::error::PaletteError;
use crate::pipeline::load::{self, ParseReport};
use crate::pipeline::render::SwatchRenderer;
use crate::pipeline::sample;
use crate::pipeline::source::{PaletteSource, SelectionMode};

/// Everything a front-end drives: the color lists, the current palette and the renderer.
///
/// Each operation either succeeds completely or leaves the session untouched.
#[derive(Debug)]
pub struct Session {
    source: PaletteSource,
    current: Vec<ColorEntry>,
    renderer: SwatchRenderer,
}

impl Session {
    pub fn new(source: PaletteSource, renderer: SwatchRenderer) -> Self {
        Self {
            source,
            current: Vec::new(),
            renderer,
        }
    }

    pub fn source(&self) -> &PaletteSource {
        &self.source
    }

    /// The most recently generated palette; empty until the first success.
    pub fn current(&self) -> &[ColorEntry] {
        &self.current
    }

    /// Append the records of a `.dat` file to the loaded list.
    pub fn load_file(&mut self, path: &Path) -> Result<ParseReport, PaletteError> {
        let report = load::load_file(path)?;
        self.source.extend_loaded(report.entries.iter().cloned());
        Ok(report)
    }

    /// Sample a new palette from the active set for `mode`.
    pub fn generate<R>(
        &mut self,
        mode: SelectionMode,
        count: usize,
        rng: &mut R,
    ) -> Result<&[ColorEntry], PaletteError>
    where
        R: RngExt + ?Sized,
    {
        let available = self.source.available(mode);
        self.current = sample::sample(&available, count, rng)?;
        Ok(&self.current)
    }

    /// Write the current palette as a PNG into `dir`. Does nothing before the first palette.
    pub fn export_image(&self, dir: &Path) -> Result<Option<PathBuf>, PaletteError> {
        if self.current.is_empty() {
            tracing::debug!("no palette generated yet, skipping export");
            return Ok(None);
        }
        self.renderer.export(&self.current, dir).map(Some)
    }
}
