use crate::{entities::grade_scale, error::RuleError};
use log::warn;
use models::grade::grade_points;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct GradeService;

impl GradeService {
    /// Grade points for a letter grade earned over `credits` credits
    pub async fn grade_points<C: ConnectionTrait>(
        db: &C,
        letter_grade: &str,
        credits: f64,
    ) -> Result<f64, RuleError> {
        let grade = letter_grade.trim();

        if grade.is_empty() {
            warn!("grade points requested for an empty grade");
            return Err(RuleError::InvalidArgument(
                "invalid grade: empty grade given".to_string(),
            ));
        }

        if !credits.is_finite() || credits < 0.0 {
            warn!("grade points requested for invalid credits {credits}");
            return Err(RuleError::InvalidArgument(format!(
                "invalid credits: expected a non-negative number, got {credits}"
            )));
        }

        let scale = grade_scale::Entity::find()
            .filter(grade_scale::Column::Grade.eq(grade))
            .one(db)
            .await?
            .ok_or_else(|| RuleError::not_found("grade scale", grade))?;

        Ok(grade_points(scale.points, credits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn scale(grade: &str, points: f64) -> grade_scale::Model {
        grade_scale::Model {
            id: 1,
            grade: grade.to_string(),
            points,
        }
    }

    #[tokio::test]
    async fn test_grade_points() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![scale("B", 3.0)]])
            .into_connection();

        let points = GradeService::grade_points(&db, "B", 4.0).await.unwrap();
        assert_eq!(points, 12.0);
    }

    #[tokio::test]
    async fn test_unknown_grade_is_an_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<grade_scale::Model>::new()])
            .into_connection();

        assert!(matches!(
            GradeService::grade_points(&db, "Q", 3.0).await,
            Err(RuleError::NotFound {
                entity: "grade scale",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        assert!(matches!(
            GradeService::grade_points(&db, " ", 3.0).await,
            Err(RuleError::InvalidArgument(_))
        ));
        for credits in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GradeService::grade_points(&db, "A", credits).await,
                Err(RuleError::InvalidArgument(_))
            ));
        }
    }
}
