use thiserror::Error;

use crate::edge::Weight;

/// Errors raised by the code-keyed [`network`](crate::network) layer.
///
/// Unreachability is deliberately not an error anywhere in this crate: it is
/// reported as an infinite distance, a missing predecessor or an empty path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A vertex code was queried that is not part of the network
    #[error("unknown airport code `{0}`")]
    UnknownAirport(String),

    /// A route weight violated the non-negative-and-finite precondition
    #[error("invalid weight {weight} on route {from} - {to}; weights must be non-negative and finite")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },
}

/// Convenience alias used throughout the network layer
pub type Result<T> = std::result::Result<T, GraphError>;
