use crate::{entities::student_load_rule, error::RuleError};
use log::{debug, warn};
use models::{
    load::{LoadQuery, LoadRuleView},
    term::TermCode,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct LoadService;

impl LoadService {
    /// Load classification (full time, half time, ...) for a credit total in a
    /// term and academic level. The first matching rule by id wins.
    pub async fn student_load<C: ConnectionTrait>(
        db: &C,
        term: &str,
        credits: f64,
        level: &str,
    ) -> Result<Option<String>, RuleError> {
        let term: TermCode = term.parse()?;
        let level = level.trim();

        if level.is_empty() {
            warn!("load classification requested for an empty academic level");
            return Err(RuleError::InvalidArgument(
                "invalid academic level: empty level given".to_string(),
            ));
        }
        if !credits.is_finite() || credits < 0.0 {
            warn!("load classification requested for invalid credits {credits}");
            return Err(RuleError::InvalidArgument(format!(
                "invalid credits: expected a non-negative number, got {credits}"
            )));
        }

        // Word matching on the list columns happens below, the range is narrowed here
        let rules = student_load_rule::Entity::find()
            .filter(student_load_rule::Column::Active.eq(true))
            .filter(student_load_rule::Column::MinCred.lte(credits))
            .filter(student_load_rule::Column::MaxCred.gte(credits))
            .order_by_asc(student_load_rule::Column::SlrId)
            .all(db)
            .await?;

        let query = LoadQuery {
            term: &term,
            credits,
            level,
        };

        let status = rules
            .into_iter()
            .find(|rule| {
                LoadRuleView {
                    terms: &rule.term,
                    levels: &rule.acad_level_code,
                    min_credits: rule.min_cred,
                    max_credits: rule.max_cred,
                    active: rule.active,
                }
                .matches(&query)
            })
            .map(|rule| rule.status);

        debug!("load for {credits} credits in {term} at level {level}: {status:?}");
        Ok(status)
    }
}
