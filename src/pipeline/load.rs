use std::path::Path;

use crate::color::{is_valid_hex, ColorEntry};
use crate::error::PaletteError;

/// Entries accepted from a palette file, plus how many lines were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<ColorEntry>,
    /// Non-blank lines that did not hold a `Name,#RRGGBB` record.
    pub skipped: usize,
}

/// Parse `Name,#RRGGBB` lines. Malformed lines are skipped, never reported as errors.
pub fn parse(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => report.entries.push(entry),
            None => report.skipped += 1,
        }
    }
    report
}

fn parse_line(line: &str) -> Option<ColorEntry> {
    let (name, hex) = line.split_once(',')?;
    let (name, hex) = (name.trim(), hex.trim());
    if !is_valid_hex(hex) {
        return None;
    }
    ColorEntry::new(name, hex).ok()
}

/// Read and parse a `.dat` palette file.
pub fn load_file(path: &Path) -> Result<ParseReport, PaletteError> {
    let text = std::fs::read_to_string(path).map_err(|source| PaletteError::UnreadablePath {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse(&text);
    tracing::info!(
        path = %path.display(),
        accepted = report.entries.len(),
        skipped = report.skipped,
        "loaded palette file"
    );
    if report.skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            "skipped {} malformed line(s)",
            report.skipped
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_malformed_middle_line() {
        let report = parse("Red,#FF0000\nBad Line\nBlue,#0000FF\n");
        assert_eq!(
            report.entries,
            [
                ColorEntry::new("Red", "#FF0000").unwrap(),
                ColorEntry::new("Blue", "#0000FF").unwrap(),
            ]
        );
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn trims_both_fields() {
        let report = parse("  Sea Foam ,  #9FE2BF  \r\n");
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].name(), "Sea Foam");
        assert_eq!(report.entries[0].hex(), "#9FE2BF");
    }

    #[test]
    fn rejects_bad_hex_fields() {
        let text = "Short,#FFF\nNoHash,FF0000X\nLong,#FF00000\nNotHex,#GG0000\n";
        let report = parse(text);
        assert!(report.entries.is_empty());
        assert_eq!(report.skipped, 4);
    }

    #[test]
    fn comma_in_name_is_skipped() {
        let report = parse("Red, Dark,#800000\n");
        assert!(report.entries.is_empty());
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn blank_lines_are_not_counted() {
        let report = parse("\n\nRed,#FF0000\n   \n");
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn empty_name_is_accepted() {
        let report = parse(",#123456");
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].name(), "");
    }

    #[test]
    fn preserves_file_order() {
        let report = parse("C,#000003\nA,#000001\nB,#000002");
        let names: Vec<_> = report.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn parsing_twice_duplicates_each_record_once() {
        let text = "Red,#FF0000\njunk\nBlue,#0000FF\n";
        let mut all = parse(text).entries;
        all.extend(parse(text).entries);
        assert_eq!(all.len(), 4);
        assert_eq!(all[..2], all[2..]);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = load_file(Path::new("/nonexistent/colors.dat")).unwrap_err();
        assert!(matches!(err, PaletteError::UnreadablePath { .. }));
        assert!(err.to_string().contains("/nonexistent/colors.dat"));
    }
}
