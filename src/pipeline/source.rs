use std::fmt;

use crate::color::ColorEntry;

/// The compiled-in hyperpop palette.
pub const BUILTIN: &[ColorEntry] = &[
    ColorEntry::builtin("Electric Pink", "#FF00C8"),
    ColorEntry::builtin("Toxic Lime", "#C8FF00"),
    ColorEntry::builtin("Sky Slush Blue", "#00EFFF"),
    ColorEntry::builtin("Chrome Lavender", "#D2A1FF"),
    ColorEntry::builtin("Digital Grape", "#8000FF"),
    ColorEntry::builtin("Retina Burn Red", "#FF1F1F"),
    ColorEntry::builtin("Bubblegum White", "#FDFDFF"),
    ColorEntry::builtin("Blacklight Void", "#0A0033"),
    ColorEntry::builtin("Glitch Yellow", "#FFFB00"),
    ColorEntry::builtin("Soft Cyan Dream", "#9EFFF7"),
    ColorEntry::builtin("Neon Coral", "#FF6EFF"),
    ColorEntry::builtin("Cyber Mint", "#99FFCC"),
    ColorEntry::builtin("Blushcore", "#FF85A1"),
    ColorEntry::builtin("Plastic Peach", "#FFD6F6"),
    ColorEntry::builtin("Slime Vibe Green", "#00FF99"),
    ColorEntry::builtin("Overdrive Orange", "#FF7700"),
    ColorEntry::builtin("Nuclear Frost", "#CCFFFF"),
    ColorEntry::builtin("Laser Lemon", "#FFFF33"),
    ColorEntry::builtin("Candyblood Red", "#FF3366"),
    ColorEntry::builtin("Tamagotchi Teal", "#00FFDD"),
    ColorEntry::builtin("Cotton Candy Fog", "#FFCCFF"),
    ColorEntry::builtin("Ice Pop Purple", "#CC99FF"),
    ColorEntry::builtin("Sunshock Yellow", "#FFF700"),
    ColorEntry::builtin("Synthetic Rose", "#FF007F"),
    ColorEntry::builtin("Hyper Ice", "#B6F7FF"),
    ColorEntry::builtin("Pixel Dust", "#F5E3FF"),
    ColorEntry::builtin("8bit Blood", "#D90037"),
    ColorEntry::builtin("Noise Turquoise", "#00FFE5"),
    ColorEntry::builtin("Chroma Blast", "#FD00FF"),
    ColorEntry::builtin("Acid Rain", "#BFFF00"),
    ColorEntry::builtin("Meme Slime", "#00FFB2"),
    ColorEntry::builtin("Overheat Orange", "#FF5500"),
    ColorEntry::builtin("Ghost Glow", "#D0FFFF"),
    ColorEntry::builtin("Bluetooth Blue", "#3399FF"),
    ColorEntry::builtin("Lavender Circuit", "#E3B9FF"),
    ColorEntry::builtin("Sugar Rush Pink", "#FFAACC"),
    ColorEntry::builtin("Twitch Purple", "#9146FF"),
    ColorEntry::builtin("Sour Byte", "#BFFFBA"),
    ColorEntry::builtin("Pop Pixel Pink", "#FF66B2"),
    ColorEntry::builtin("Ultra Cyan", "#00FFFF"),
    ColorEntry::builtin("Synthetic Strawberry", "#FF4D6D"),
    ColorEntry::builtin("Toxic Cotton", "#E6FFB8"),
    ColorEntry::builtin("Pastel Battery", "#F6FFD7"),
    ColorEntry::builtin("Corrosive Mango", "#FFB84D"),
    ColorEntry::builtin("Electro Magenta", "#FF008C"),
    ColorEntry::builtin("Radioactive Teal", "#00FFD1"),
    ColorEntry::builtin("Hard Light Rose", "#F08080"),
    ColorEntry::builtin("Skater Mint", "#D2FFE3"),
    ColorEntry::builtin("Arcade Lava", "#FF4500"),
    ColorEntry::builtin("Cursed Plasma", "#B300FF"),
    ColorEntry::builtin("Blinding Fizz", "#FFFFE0"),
    ColorEntry::builtin("Supernova Citrus", "#FFF200"),
    ColorEntry::builtin("Heatwave Pink", "#FF5FA2"),
    ColorEntry::builtin("Power Surge", "#FF00E6"),
    ColorEntry::builtin("Artificial Lemonade", "#FCFF6C"),
    ColorEntry::builtin("Unicorn Noise", "#FCE1FF"),
];

/// Which lists feed the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SelectionMode {
    #[default]
    #[value(name = "builtin")]
    BuiltinOnly,
    #[value(name = "loaded")]
    LoadedOnly,
    Mixed,
}

impl SelectionMode {
    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            SelectionMode::BuiltinOnly => SelectionMode::LoadedOnly,
            SelectionMode::LoadedOnly => SelectionMode::Mixed,
            SelectionMode::Mixed => SelectionMode::BuiltinOnly,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionMode::BuiltinOnly => "Base Palette Only",
            SelectionMode::LoadedOnly => "Loaded Palette Only",
            SelectionMode::Mixed => "Mixed Palette",
        };
        f.write_str(label)
    }
}

/// Built-in table plus everything loaded from files during this run.
#[derive(Debug, Clone)]
pub struct PaletteSource {
    builtin: &'static [ColorEntry],
    loaded: Vec<ColorEntry>,
}

impl Default for PaletteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteSource {
    pub fn new() -> Self {
        Self::with_builtin(BUILTIN)
    }

    /// Source backed by a different fixed table.
    pub fn with_builtin(builtin: &'static [ColorEntry]) -> Self {
        Self {
            builtin,
            loaded: Vec::new(),
        }
    }

    pub fn builtin(&self) -> &[ColorEntry] {
        self.builtin
    }

    pub fn loaded(&self) -> &[ColorEntry] {
        &self.loaded
    }

    /// Append entries after any previously loaded ones. Duplicates are kept.
    pub fn extend_loaded(&mut self, entries: impl IntoIterator<Item = ColorEntry>) {
        self.loaded.extend(entries);
    }

    /// The active set for `mode`: builtin first, then loaded, order preserved.
    pub fn available(&self, mode: SelectionMode) -> Vec<ColorEntry> {
        match mode {
            SelectionMode::BuiltinOnly => self.builtin.to_vec(),
            SelectionMode::LoadedOnly => self.loaded.clone(),
            SelectionMode::Mixed => self
                .builtin
                .iter()
                .chain(self.loaded.iter())
                .cloned()
                .collect(),
        }
    }
}
