//! Per-sequence pipeline: occurrence scan followed by lane layout.
//!
//! Sequences share nothing mutable, so [`MotifMarkEngine::layout_all`] can lay
//! them out on the rayon pool; the sweep inside one sequence stays sequential.

use crate::{
    layout::{LaneAssignment, LaneStrategy, assign_lanes},
    motif::MotifSet,
    occurrence::find_all_occurrences,
    sequence::Sequence,
};
use itertools::Itertools;
use log::{debug, info};
use motif_mark_protocol::{ExonSpan, LayoutReport, PlacedMotif, SequenceReport};
use rayon::prelude::*;

/// Layout result for one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLayout {
    label: String,
    length: usize,
    exons: Vec<ExonSpan>,
    assignment: LaneAssignment,
}

impl SequenceLayout {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn assignment(&self) -> &LaneAssignment {
        &self.assignment
    }

    pub fn lane_count(&self) -> usize {
        self.assignment.lane_count()
    }

    /// `motifs` must be the set the layout was computed with; motif ids index
    /// into it.
    pub(crate) fn to_report(&self, motifs: &MotifSet) -> SequenceReport {
        let occurrences = self
            .assignment
            .placements()
            .iter()
            .filter_map(|p| {
                let motif = motifs.motifs().get(p.occurrence.motif_id())?;
                Some(PlacedMotif {
                    motif: motif.text().to_string(),
                    start: p.occurrence.start(),
                    end: p.occurrence.end(),
                    lane: p.lane,
                })
            })
            .collect();
        SequenceReport {
            label: self.label.clone(),
            length: self.length,
            exons: self.exons.clone(),
            occurrences,
            lane_count: self.lane_count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MotifMarkEngine {
    motifs: MotifSet,
    strategy: LaneStrategy,
    parallel: bool,
}

impl MotifMarkEngine {
    pub fn new(motifs: MotifSet) -> Self {
        Self {
            motifs,
            strategy: LaneStrategy::default(),
            parallel: true,
        }
    }

    pub fn with_strategy(mut self, strategy: LaneStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strategy(&self) -> LaneStrategy {
        self.strategy
    }

    pub fn layout_sequence(&self, sequence: &Sequence) -> SequenceLayout {
        let occurrences = find_all_occurrences(sequence.normalized(), &self.motifs);
        let assignment = assign_lanes(&occurrences, self.strategy);
        debug!(
            "'{}': {} occurrences on {} lanes",
            sequence.label(),
            assignment.len(),
            assignment.lane_count()
        );
        SequenceLayout {
            label: sequence.label().to_string(),
            length: sequence.len(),
            exons: sequence.exons(),
            assignment,
        }
    }

    /// Lays out every sequence; output order follows input order.
    pub fn layout_all(&self, sequences: &[Sequence]) -> Vec<SequenceLayout> {
        let ret: Vec<SequenceLayout> = if self.parallel {
            sequences
                .par_iter()
                .map(|s| self.layout_sequence(s))
                .collect()
        } else {
            sequences.iter().map(|s| self.layout_sequence(s)).collect()
        };
        info!(
            "Laid out {} motifs ({}) over {} sequences using {} lanes",
            self.motifs.len(),
            self.motifs.motifs().iter().map(|m| m.text()).join(", "),
            ret.len(),
            self.strategy
        );
        ret
    }

    pub fn report(&self, layouts: &[SequenceLayout]) -> LayoutReport {
        LayoutReport::new(
            self.motifs.palette(),
            layouts.iter().map(|l| l.to_report(&self.motifs)).collect(),
        )
    }
}
