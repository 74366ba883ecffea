//! Motifs and the ordered motif set loaded from a motif file.

use crate::{
    error::{MotifMarkError, Result},
    iupac_code::{IupacCode, expand_motif},
};
use log::{debug, warn};
use motif_mark_protocol::MotifColor;
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Colour-blind safe palette, cycled when there are more motifs than colours.
const MOTIF_PALETTE: &[&str] = &[
    "#0072b2", "#e69f00", "#009e73", "#cc79a7", "#d55e00", "#56b4e9", "#f0e442", "#000000",
];

/// A validated motif. Identity is the lowercase text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    text: String,
    pattern: Vec<IupacCode>,
}

impl Motif {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim().to_ascii_lowercase();
        let pattern = expand_motif(&text)?;
        Ok(Self { text, pattern })
    }

    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn pattern(&self) -> &[IupacCode] {
        &self.pattern
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifSet {
    motifs: Vec<Motif>,
}

impl MotifSet {
    /// Builds a set from motif lines. Blank lines are skipped and later
    /// duplicates dropped; a single invalid motif fails the whole load.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut motifs = Vec::new();
        let mut seen = HashSet::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let motif = Motif::new(line)?;
            if !seen.insert(motif.text().to_string()) {
                warn!("Ignoring duplicate motif '{}'", motif.text());
                continue;
            }
            motifs.push(motif);
        }
        Ok(Self { motifs })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MotifMarkError::io(format!("could not open motif file '{}'", path.display()), e)
        })?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| {
                MotifMarkError::io(format!("could not read motif file '{}'", path.display()), e)
            })?;
        let ret = Self::from_lines(lines)?;
        debug!("Loaded {} motifs from '{}'", ret.len(), path.display());
        Ok(ret)
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// Motif to colour mapping in load order.
    pub fn palette(&self) -> Vec<MotifColor> {
        self.motifs
            .iter()
            .zip(MOTIF_PALETTE.iter().cycle())
            .map(|(motif, color)| MotifColor {
                motif: motif.text().to_string(),
                color: color.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_motif_normalizes_case_and_whitespace() {
        let motif = Motif::new(" YGCY\n").unwrap();
        assert_eq!(motif.text(), "ygcy");
        assert_eq!(motif.len(), 4);
        assert!(!motif.is_empty());
    }

    #[test]
    fn test_empty_motif_is_valid() {
        let motif = Motif::new("").unwrap();
        assert!(motif.is_empty());
    }

    #[test]
    fn test_from_lines_skips_blanks_and_duplicates() {
        let set = MotifSet::from_lines(["ygcy", "", "GCAUG", "catag", "YGCY", "  "]).unwrap();
        let texts: Vec<&str> = set.motifs().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["ygcy", "gcaug", "catag"]);
    }

    #[test]
    fn test_from_lines_rejects_whole_set() {
        let err = MotifSet::from_lines(["ygcy", "gcxtg"]).unwrap_err();
        assert!(matches!(
            err,
            MotifMarkError::InvalidMotifSymbol { symbol: 'x', .. }
        ));
    }

    #[test]
    fn test_palette_follows_load_order() {
        let lines: Vec<String> = (1..=10).map(|n| "a".repeat(n)).collect();
        let set = MotifSet::from_lines(&lines).unwrap();
        let palette = set.palette();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette[0].motif, "a");
        assert_eq!(palette[0].color, MOTIF_PALETTE[0]);
        assert_eq!(palette[8].color, MOTIF_PALETTE[0]);
        assert_eq!(palette[9].color, MOTIF_PALETTE[1]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ygcy\nGCAUG\ncatag\nYYYYYYYYYY").unwrap();
        let set = MotifSet::from_path(file.path()).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.motifs()[3].text(), "yyyyyyyyyy");
    }

    #[test]
    fn test_from_missing_path() {
        let result = MotifSet::from_path("nonexistent_motifs.txt");
        assert!(matches!(result, Err(MotifMarkError::Io { .. })));
    }
}
