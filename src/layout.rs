//! Lane assignment for stacking occurrences vertically.
//!
//! Occurrences are swept left to right after a stable sort on start position.
//! Two strategies are available:
//!
//! - [`LaneStrategy::ActiveCount`] gives each occurrence the lane equal to the
//!   number of earlier occurrences still open at its start. It never looks at
//!   which lane numbers are actually free, so a freshly vacated lane is not
//!   recycled and two overlapping occurrences may end up on the same lane.
//! - [`LaneStrategy::FirstFree`] gives each occurrence the lowest lane whose
//!   previous occupant has ended, so occurrences sharing a lane never overlap.

use crate::occurrence::Occurrence;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaneStrategy {
    #[default]
    ActiveCount,
    FirstFree,
}

impl FromStr for LaneStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active-count" => Ok(Self::ActiveCount),
            "first-free" => Ok(Self::FirstFree),
            other => Err(format!(
                "Unknown lane strategy '{other}', expected 'active-count' or 'first-free'"
            )),
        }
    }
}

impl fmt::Display for LaneStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveCount => write!(f, "active-count"),
            Self::FirstFree => write!(f, "first-free"),
        }
    }
}

/// An occurrence with its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub occurrence: Occurrence,
    pub lane: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment {
    placements: Vec<Placement>,
    lane_count: usize,
}

impl LaneAssignment {
    /// Placements in sweep order (start ascending, ties in input order).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn lane_of(&self, occurrence: &Occurrence) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.occurrence == *occurrence)
            .map(|p| p.lane)
    }
}

fn sorted_by_start(occurrences: &[Occurrence]) -> Vec<Occurrence> {
    let mut sorted = occurrences.to_vec();
    // stable: equal starts keep discovery order
    sorted.sort_by_key(|o| o.start());
    sorted
}

fn sweep_active_count(sorted: Vec<Occurrence>) -> Vec<Placement> {
    let mut active_ends: Vec<usize> = vec![];
    sorted
        .into_iter()
        .map(|occurrence| {
            active_ends.retain(|&end| end > occurrence.start());
            active_ends.push(occurrence.end());
            Placement {
                occurrence,
                lane: active_ends.len() - 1,
            }
        })
        .collect()
}

fn lane_allocate(lane_ends: &mut Vec<usize>, start: usize, end: usize) -> usize {
    for (idx, lane_end) in lane_ends.iter_mut().enumerate() {
        if start >= *lane_end {
            *lane_end = end;
            return idx;
        }
    }
    lane_ends.push(end);
    lane_ends.len() - 1
}

fn sweep_first_free(sorted: Vec<Occurrence>) -> Vec<Placement> {
    let mut lane_ends: Vec<usize> = vec![];
    sorted
        .into_iter()
        .map(|occurrence| Placement {
            occurrence,
            lane: lane_allocate(&mut lane_ends, occurrence.start(), occurrence.end()),
        })
        .collect()
}

/// Assigns a lane to every occurrence of one sequence. Never fails; empty
/// input gives an empty assignment with zero lanes.
pub fn assign_lanes(occurrences: &[Occurrence], strategy: LaneStrategy) -> LaneAssignment {
    let sorted = sorted_by_start(occurrences);
    let placements = match strategy {
        LaneStrategy::ActiveCount => sweep_active_count(sorted),
        LaneStrategy::FirstFree => sweep_first_free(sorted),
    };
    let lane_count = placements.iter().map(|p| p.lane + 1).max().unwrap_or(0);
    LaneAssignment {
        placements,
        lane_count,
    }
}
