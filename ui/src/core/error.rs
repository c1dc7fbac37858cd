//! Errors raised by the presentation layer.

use thiserror::Error;

/// A record carried a value the dashboard has no display mapping for.
///
/// This is a bug in the upstream data, not a state the UI should try to
/// recover from. It is surfaced instead of rendering a blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataContractError {
    #[error("unknown notification provider `{0}`")]
    UnknownProvider(String),
    #[error("unknown notification status `{0}`")]
    UnknownStatus(String),
}

/// Returned by commands that exist in the interface but have no behaviour yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("`{0}` is not wired to anything yet")]
    Unwired(&'static str),
}
