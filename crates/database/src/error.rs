use models::{ids::IdError, term::EmptyTermError};
use sea_orm::DbErr;

/// Failure of a student rule
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The caller passed something that can never identify a record
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl RuleError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<IdError> for RuleError {
    fn from(err: IdError) -> Self {
        log::warn!("rejected identifier: {err}");
        Self::InvalidArgument(err.to_string())
    }
}

impl From<EmptyTermError> for RuleError {
    fn from(err: EmptyTermError) -> Self {
        log::warn!("rejected term: {err}");
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RuleError::not_found("course section", 77);
        assert_eq!(err.to_string(), "course section '77' not found");

        let err: RuleError = "".parse::<models::ids::StudentId>().unwrap_err().into();
        assert!(matches!(err, RuleError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid student ID: empty ID given");
    }
}
