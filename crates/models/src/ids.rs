use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Error returned when a raw identifier cannot be used to look up a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("invalid {kind} ID: empty ID given")]
    Empty { kind: &'static str },
    #[error("invalid {kind} ID: {kind} id must be numeric, got '{value}'")]
    NonNumeric { kind: &'static str, value: String },
}

/// Parses a numeric database identifier, trimming surrounding whitespace.
///
/// Only ASCII digits are accepted, so signs, decimals and exponents are all
/// rejected even though they would be "numeric" in a looser sense.
fn parse_numeric(raw: &str, kind: &'static str) -> Result<i64, IdError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(IdError::Empty { kind });
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(IdError::NonNumeric {
            kind,
            value: trimmed.to_string(),
        });
    }

    // Digits only, so the sole failure left is overflow
    trimmed.parse().map_err(|_| IdError::NonNumeric {
        kind,
        value: trimmed.to_string(),
    })
}

/// Identifier shared by a person and their student record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl FromStr for StudentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric(s, "student").map(StudentId)
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single offering of a course in a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub i64);

impl FromStr for SectionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric(s, "course section").map(SectionId)
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
