//! Structural rearrangements of chromosomes.
//!
//! - **Selection**: choosing the regions a rearrangement breaks
//! - **Inversion**: reversing a segment of one chromosome
//! - **Translocation**: moving a segment from one chromosome to the other

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod inversion;
pub mod selection;
pub mod translocation;

pub use inversion::Inversion;
pub use selection::{
    ESSENTIAL_WINDOW_TRIALS, EssentialWindow, RegionSelection, RegionSelector,
    compute_probabilities_based_on_length, select_random_region,
    select_random_region_with_constraints,
};
pub use translocation::{Translocation, TranslocationParameters};

/// Kind of a scheduled rearrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformationKind {
    Inversion,
    Translocation,
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformationKind::Inversion => write!(f, "inversion"),
            TransformationKind::Translocation => write!(f, "translocation"),
        }
    }
}

/// Why a rearrangement left its chromosomes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No region could break.
    NoCandidates,
    /// Fewer breakable regions than the rearrangement needs.
    Insufficient { requested: usize, available: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoCandidates => write!(f, "no breakable region"),
            SkipReason::Insufficient {
                requested,
                available,
            } => write!(f, "{available} breakable regions, {requested} needed"),
        }
    }
}

/// Result of one random rearrangement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Applied,
    Skipped(SkipReason),
}

impl StepOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TransformationKind::Translocation).unwrap();
        assert_eq!(json, "\"translocation\"");
        let kind: TransformationKind = serde_json::from_str("\"inversion\"").unwrap();
        assert_eq!(kind, TransformationKind::Inversion);
        assert_eq!(kind.to_string(), "inversion");
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::Insufficient {
            requested: 2,
            available: 1,
        };
        assert_eq!(reason.to_string(), "1 breakable regions, 2 needed");
        assert!(!StepOutcome::Skipped(reason).is_applied());
        assert!(StepOutcome::Applied.is_applied());
    }
}
