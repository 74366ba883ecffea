//! Labelled input sequences and FASTA loading.

use crate::error::{MotifMarkError, Result};
use bio::io::fasta;
use log::{debug, warn};
use motif_mark_protocol::ExonSpan;
use std::{fs::File, io, path::Path};

/// A labelled sequence. The raw text keeps its letter case for exon
/// detection; matching works on a separate lowercase copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    label: String,
    raw: Vec<u8>,
    normalized: Vec<u8>,
}

impl Sequence {
    pub fn new(label: &str, raw: &str) -> Result<Self> {
        Self::from_u8(label, raw.as_bytes())
    }

    pub fn from_u8(label: &str, raw: &[u8]) -> Result<Self> {
        let label = label.trim().trim_start_matches('>').trim().to_string();
        if raw.is_empty() {
            return Err(MotifMarkError::EmptySequence { label });
        }
        Ok(Self {
            label,
            raw: raw.to_vec(),
            normalized: raw.to_ascii_lowercase(),
        })
    }

    fn from_fasta_record(record: &fasta::Record) -> Result<Self> {
        let label = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        Self::from_u8(&label, record.seq())
    }

    /// Reads every record of a FASTA stream. Records without bases are
    /// skipped with a warning so the remaining sequences still get laid out.
    pub fn from_fasta_reader<R: io::Read>(reader: R) -> Result<Vec<Self>> {
        let mut ret = vec![];
        for record in fasta::Reader::new(reader).records() {
            let record = record.map_err(|e| MotifMarkError::io("could not read FASTA record", e))?;
            if record.seq().is_empty() {
                warn!("Skipping FASTA record '{}' without bases", record.id());
                continue;
            }
            ret.push(Self::from_fasta_record(&record)?);
        }
        Ok(ret)
    }

    pub fn from_fasta_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MotifMarkError::io(format!("could not open FASTA file '{}'", path.display()), e)
        })?;
        let ret = Self::from_fasta_reader(file)?;
        debug!("Loaded {} sequences from '{}'", ret.len(), path.display());
        Ok(ret)
    }

    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Case-preserved bases as read.
    #[inline(always)]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Lowercase bases used for matching.
    #[inline(always)]
    pub fn normalized(&self) -> &[u8] {
        &self.normalized
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Maximal runs of uppercase letters in the raw sequence.
    pub fn exons(&self) -> Vec<ExonSpan> {
        let mut ret = vec![];
        let mut open: Option<usize> = None;
        for (pos, base) in self.raw.iter().enumerate() {
            match (base.is_ascii_uppercase(), open) {
                (true, None) => open = Some(pos),
                (false, Some(start)) => {
                    ret.push(ExonSpan { start, end: pos });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            ret.push(ExonSpan {
                start,
                end: self.raw.len(),
            });
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalized_copy_is_separate() {
        let seq = Sequence::new(">chr1 gene", "acgTTGcat").unwrap();
        assert_eq!(seq.label(), "chr1 gene");
        assert_eq!(seq.raw(), b"acgTTGcat");
        assert_eq!(seq.normalized(), b"acgttgcat");
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_exons_from_case() {
        let seq = Sequence::new("s", "aaCCGtttGGaaTT").unwrap();
        assert_eq!(
            seq.exons(),
            vec![
                ExonSpan { start: 2, end: 5 },
                ExonSpan { start: 8, end: 10 },
                ExonSpan { start: 12, end: 14 },
            ]
        );
        assert!(Sequence::new("s", "acgt").unwrap().exons().is_empty());
    }

    #[test]
    fn test_fasta_skips_empty_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b">a\nacgt\n>empty\n>b\nggcc\n").unwrap();
        let seqs = Sequence::from_fasta_path(file.path()).unwrap();
        let labels: Vec<&str> = seqs.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(seqs[1].normalized(), b"ggcc");

        assert!(matches!(
            Sequence::new(">empty", ""),
            Err(MotifMarkError::EmptySequence { label }) if label == "empty"
        ));
    }

    #[test]
    fn test_fasta_multiline_folding() {
        let text = b">INSR chr19:7150261-7150808 (reverse complement)\nacgtAC\nGTac\n>MBNL chr3\nttttgg\n";
        let seqs = Sequence::from_fasta_reader(&text[..]).unwrap();
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].label(), "INSR chr19:7150261-7150808 (reverse complement)");
        assert_eq!(seqs[0].raw(), b"acgtACGTac");
        assert_eq!(seqs[0].exons(), vec![ExonSpan { start: 4, end: 8 }]);
        assert_eq!(seqs[1].label(), "MBNL chr3");
        assert_eq!(seqs[1].normalized(), b"ttttgg");
    }

    #[test]
    fn test_fasta_missing_file() {
        assert!(Sequence::from_fasta_path("nonexistent.fasta").is_err());
    }
}
