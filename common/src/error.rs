use thiserror::Error;

/// Rejected puzzle arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid starting hole {0}, must range from 1 to 15")]
    StartOutOfRange(i64),

    #[error("invalid ending location {0}, must range from 1 to 15")]
    EndOutOfRange(i64),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The search was never started.
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    /// Every sequence of jumps was tried without reaching the required end.
    #[error("no solution can be found")]
    NoSolution,
}
