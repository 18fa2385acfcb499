use thiserror::Error;

/// Settings that cannot start a run.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target phrase must not be empty")]
    EmptyTarget,
    #[error("target byte {byte:#04x} at position {index} is not printable ascii, so no gene can match it")]
    UnreachableTarget { index: usize, byte: u8 },
    #[error("population size must be at least 1")]
    EmptyPopulation,
    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRate(f64),
    #[error("generation cap must be at least 1 when set")]
    ZeroGenerationCap,
}
