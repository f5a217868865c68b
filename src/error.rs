//! Benchgen-specific errors
//!
//! All of them are configuration errors, raised before anything is written.
//! I/O failures are not part of this enum: they travel as [`anyhow::Error`]
//! out of [`crate::fs`].
use thiserror::Error;

/// An error that Benchgen could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BenchgenError {
    #[error("invalid range: low bound {low} is greater than high bound {high}")]
    InvalidRange { low: i64, high: i64 },
    /// `{min}` and `{max}` are the requested bounds on the length of a string.
    #[error("invalid string length bounds [{min}, {max}]")]
    InvalidLength { min: usize, max: usize },
    #[error("alphabet is empty")]
    EmptyAlphabet,
    /// `{0}` is the offending character.
    #[error("alphabet contains whitespace character {0:?}")]
    WhitespaceInAlphabet(char),
    #[error("denominator range [0, 0] can only produce zero")]
    ZeroDenominatorRange,
    /// `{0}` is the name that was asked for.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}
