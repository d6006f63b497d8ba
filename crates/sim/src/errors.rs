use thiserror::Error;

use crate::genome::{RegionId, Side};

/// Errors raised while parsing a chromosome description.
///
/// Positions are character offsets into the description string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    /// A boundary marker appeared where the grammar does not allow it
    /// (closing without opening, nested opening, marker inside a gene).
    #[error("Unexpected '{marker}' at position {position}")]
    UnexpectedMarker { marker: char, position: usize },

    /// The description ended while a boundary was still open.
    #[error("Unclosed '{marker}' opened at position {position}")]
    Unclosed { marker: char, position: usize },

    /// The essential gene marker must sit directly before a gene's closing `)`.
    #[error("Essential gene marker at position {position} must directly precede ')'")]
    MisplacedEssentialMarker { position: usize },

    /// A character that cannot be a sequence symbol.
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Errors that can occur while selecting break regions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// Probability outside of [0, 1] or not finite.
    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    /// The essential gene window could not be satisfied within the trial budget.
    #[error(
        "No breakable window of {window_size} genes with fewer than {min_essential} essential genes found after {trials} trials"
    )]
    ConstraintExhausted {
        window_size: usize,
        min_essential: usize,
        trials: usize,
    },
}

/// Errors raised by the structural transformations.
///
/// All checks run before the chromosomes are touched, so an error always
/// leaves the input unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformationError {
    #[error("Region {0} is not part of the chromosome")]
    UnknownRegion(RegionId),

    #[error("Region {left} does not precede region {right}")]
    RegionOrder { left: RegionId, right: RegionId },

    #[error("Breakpoint {offset} is outside region {region} of length {len}")]
    BreakpointOutOfRange {
        region: RegionId,
        offset: usize,
        len: usize,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors in simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Invalid translocation rate: {0} (must be between 0 and 100)")]
    InvalidTranslocationRate(u8),

    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    #[error("Missing parameter {0} required by essential gene pairs")]
    MissingWindowParameter(&'static str),

    #[error("Essential gene window size must be at least 1")]
    EmptyWindow,
}

/// Errors in random chromosome generator settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("Invalid {name} length range: {min}..={max}")]
    InvalidRange {
        name: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Invalid essential gene probability: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),
}

/// Errors that can occur during simulation building.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Errors that abort a whole simulation run.
///
/// Per-step selection shortfalls are not errors; they show up as skipped
/// steps in the history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Failed to parse {side} chromosome: {source}")]
    Description {
        side: Side,
        #[source]
        source: DescriptionError,
    },

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("Step {step}: {source}")]
    Transformation {
        step: usize,
        #[source]
        source: TransformationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_error_display() {
        let err = DescriptionError::Unclosed {
            marker: '(',
            position: 4,
        };
        assert_eq!(err.to_string(), "Unclosed '(' opened at position 4");
    }

    #[test]
    fn test_simulation_error_names_side() {
        let err = SimulationError::Description {
            side: Side::Right,
            source: DescriptionError::UnexpectedMarker {
                marker: ')',
                position: 0,
            },
        };
        assert!(err.to_string().contains("right"));
    }
}
