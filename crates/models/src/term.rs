use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Error returned for a blank term code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid term: empty term code given")]
pub struct EmptyTermError;

/// An academic term code, e.g. `202401` or `15/FA`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCode(String);

impl TermCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The slash-separated parts of the code; a plain code yields itself once
    pub fn components(&self) -> Vec<&str> {
        self.0
            .split('/')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

impl FromStr for TermCode {
    type Err = EmptyTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptyTermError);
        }

        Ok(TermCode(trimmed.to_string()))
    }
}

impl Display for TermCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
