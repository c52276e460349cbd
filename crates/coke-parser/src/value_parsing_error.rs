use crate::GraphQLStringParsingError;

/// Errors that occur when converting a literal token's raw text into its
/// value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    #[error("Invalid GraphQL string: {0}")]
    String(#[from] GraphQLStringParsingError),

    /// The integer does not fit in a signed 64-bit integer.
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// The float is not a finite `f64` (e.g. `1e400`).
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
