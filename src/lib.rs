//! Find IUPAC-coded motifs in DNA sequences, keeping overlapping hits, and
//! stack the hits into lanes for drawing.

use std::path::Path;

pub mod about;
pub mod engine;
pub mod error;
pub mod iupac_code;
pub mod layout;
pub mod motif;
pub mod occurrence;
pub mod sequence;
pub mod settings;

pub use engine::{MotifMarkEngine, SequenceLayout};
pub use error::{MotifMarkError, Result};
pub use layout::{LaneAssignment, LaneStrategy, Placement, assign_lanes};
pub use motif::{Motif, MotifSet};
pub use motif_mark_protocol::LayoutReport;
pub use occurrence::{Occurrence, find_all_occurrences, find_occurrences};
pub use sequence::Sequence;
pub use settings::RunSettings;

/// Loads a FASTA file and a motif file and lays out every sequence.
///
/// Motifs are validated before any sequence is read or scanned.
pub fn layout_files<P, Q>(fasta: P, motifs: Q, settings: &RunSettings) -> Result<LayoutReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let motifs = MotifSet::from_path(motifs)?;
    let sequences = Sequence::from_fasta_path(fasta)?;
    let engine = MotifMarkEngine::new(motifs)
        .with_strategy(settings.lanes)
        .with_parallel(settings.parallel);
    let layouts = engine.layout_all(&sequences);
    Ok(engine.report(&layouts))
}
