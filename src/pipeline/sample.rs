use rand::RngExt;

use crate::color::ColorEntry;
use crate::error::PaletteError;

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 7;
pub const DEFAULT_COUNT: usize = 5;

/// Draw `count` entries from `available` uniformly at random, without replacement.
///
/// Runs a partial Fisher-Yates shuffle over indices, so no position in
/// `available` is picked twice even when two entries hold the same color.
pub fn sample<R>(
    available: &[ColorEntry],
    count: usize,
    rng: &mut R,
) -> Result<Vec<ColorEntry>, PaletteError>
where
    R: RngExt + ?Sized,
{
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(PaletteError::InvalidCount {
            count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        });
    }
    if available.len() < count {
        return Err(PaletteError::InsufficientColors {
            requested: count,
            available: available.len(),
        });
    }

    let mut indices: Vec<usize> = (0..available.len()).collect();
    for i in 0..count {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }

    let picked: Vec<ColorEntry> = indices[..count]
        .iter()
        .map(|&i| available[i].clone())
        .collect();
    tracing::debug!(
        count,
        available = available.len(),
        "sampled palette: {}",
        picked
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(picked)
}
