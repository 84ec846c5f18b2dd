use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flightgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an IATA code could not be found in the graph.
    #[error("unknown airport: {iata}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        iata: String,
        suggestions: Vec<String>,
    },

    /// Raised when the source airport exists but has no outbound routes.
    #[error("no flights depart from {iata}")]
    UnknownSource { iata: String },

    /// Raised when no route could be found, even after rerouting.
    #[error("no route found between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },

    /// Raised when a path handed to the route composer is too short.
    #[error("invalid route path with {len} airport(s); at least two are required")]
    InvalidPath { len: usize },

    /// Raised when a route criterion name is not recognised.
    #[error(
        "invalid route criterion '{value}'; expected one of: optimal, shortest-distance, \
         least-cost, shortest-duration, least-layovers"
    )]
    InvalidCriterion { value: String },

    /// Raised when a query (or one of its legs) starts and ends at the same airport.
    #[error("source and destination are both {iata}")]
    SameEndpoints { iata: String },

    /// Dataset file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` for failures raised while validating a query, before any search ran.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownAirport { .. }
                | Error::InvalidCriterion { .. }
                | Error::SameEndpoints { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_lists_suggestions() {
        let err = Error::UnknownAirport {
            iata: "LHX".to_string(),
            suggestions: vec!["LHR".to_string()],
        };
        assert_eq!(err.to_string(), "unknown airport: LHX. Did you mean 'LHR'?");

        let err = Error::UnknownAirport {
            iata: "ZZZ".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown airport: ZZZ");
    }

    #[test]
    fn validation_errors_are_distinct_from_no_route() {
        let no_route = Error::NoRoute {
            origin: "LHR".to_string(),
            destination: "SUF".to_string(),
        };
        assert!(!no_route.is_validation());
        assert!(Error::InvalidCriterion {
            value: "fastest".to_string()
        }
        .is_validation());
    }
}
