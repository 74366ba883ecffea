//! Machine-readable records exchanged between the motif-mark engine and
//! renderers.

use serde::{Deserialize, Serialize};

pub const LAYOUT_SCHEMA: &str = "motif_mark.layout.v1";

/// Draw colour assigned to one motif.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifColor {
    pub motif: String,
    pub color: String,
}

/// One motif occurrence with its assigned lane. `start` is 0-based and `end`
/// is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMotif {
    pub motif: String,
    pub start: usize,
    pub end: usize,
    pub lane: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub label: String,
    pub length: usize,
    pub exons: Vec<ExonSpan>,
    pub occurrences: Vec<PlacedMotif>,
    pub lane_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub schema: String,
    pub motifs: Vec<MotifColor>,
    pub sequences: Vec<SequenceReport>,
}

impl LayoutReport {
    pub fn new(motifs: Vec<MotifColor>, sequences: Vec<SequenceReport>) -> Self {
        Self {
            schema: LAYOUT_SCHEMA.to_string(),
            motifs,
            sequences,
        }
    }

    pub fn color_of(&self, motif: &str) -> Option<&str> {
        self.motifs
            .iter()
            .find(|m| m.motif == motif)
            .map(|m| m.color.as_str())
    }

    pub fn max_lane_count(&self) -> usize {
        self.sequences
            .iter()
            .map(|s| s.lane_count)
            .max()
            .unwrap_or(0)
    }
}
