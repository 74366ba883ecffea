//! Motif occurrences and the overlapping sliding-window scan.

use crate::{
    error::{MotifMarkError, Result},
    iupac_code::IupacCode,
    motif::MotifSet,
};

/// One placement of a motif in a sequence. `motif_id` indexes the motif set;
/// `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    motif_id: usize,
    start: usize,
    end: usize,
}

impl Occurrence {
    pub fn new(motif_id: usize, start: usize, end: usize, sequence_len: usize) -> Result<Self> {
        if start > end || end > sequence_len {
            return Err(MotifMarkError::InvalidOccurrence {
                start,
                end,
                sequence_len,
            });
        }
        Ok(Self {
            motif_id,
            start,
            end,
        })
    }

    #[inline(always)]
    pub fn motif_id(&self) -> usize {
        self.motif_id
    }

    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline(always)]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[inline(always)]
fn matches_at(sequence: &[u8], pattern: &[IupacCode], start: usize) -> bool {
    pattern
        .iter()
        .zip(&sequence[start..start + pattern.len()])
        .all(|(code, base)| code.accepts(*base))
}

/// Every start position where `pattern` matches `sequence`, in increasing
/// order. Each offset is tested independently, so overlapping hits are all
/// reported. An empty sequence or pattern yields nothing.
pub fn find_occurrences(sequence: &[u8], motif_id: usize, pattern: &[IupacCode]) -> Vec<Occurrence> {
    if pattern.is_empty() || pattern.len() > sequence.len() {
        return vec![];
    }
    (0..=sequence.len() - pattern.len())
        .filter(|&start| matches_at(sequence, pattern, start))
        .map(|start| Occurrence {
            motif_id,
            start,
            end: start + pattern.len(),
        })
        .collect()
}

/// Pools the occurrences of every motif, in motif order then position.
pub fn find_all_occurrences(sequence: &[u8], motifs: &MotifSet) -> Vec<Occurrence> {
    motifs
        .motifs()
        .iter()
        .enumerate()
        .flat_map(|(motif_id, motif)| find_occurrences(sequence, motif_id, motif.pattern()))
        .collect()
}
