//! Records produced by a simulation run.

use serde::{Deserialize, Serialize};

use crate::evolution::TransformationKind;
use crate::genome::{Ordinal, Side};

/// State of the pair after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based step number.
    pub step: usize,
    pub kind: TransformationKind,
    /// False when the step was skipped for lack of breakable regions.
    pub applied: bool,
    pub left_ordinals: Vec<Ordinal>,
    pub right_ordinals: Vec<Ordinal>,
    /// Edit distance to the starting pair, when diffs are computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

impl HistoryEntry {
    pub fn ordinals(&self, side: Side) -> &[Ordinal] {
        match side {
            Side::Left => &self.left_ordinals,
            Side::Right => &self.right_ordinals,
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub history: Vec<HistoryEntry>,
    /// Final left sequence.
    pub final_left: String,
    /// Final right sequence.
    pub final_right: String,
    /// Description of the final left chromosome; parses back for a follow-up run.
    pub final_left_description: String,
    pub final_right_description: String,
}

impl SimulationResult {
    /// Number of steps that changed the pair.
    pub fn applied_steps(&self) -> usize {
        self.history.iter().filter(|entry| entry.applied).count()
    }

    /// Distance after the last step, if diffs were computed.
    pub fn final_distance(&self) -> Option<usize> {
        self.history.last().and_then(|entry| entry.distance)
    }
}
