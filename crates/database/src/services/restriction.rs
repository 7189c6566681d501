use crate::{
    entities::{department, restriction, restriction_code},
    error::RuleError,
    rows::{DepartmentName, RestrictionRow},
};
use models::{
    ids::StudentId,
    restriction::{FERPA_CODE, REGISTRATION_BLOCK_SEVERITY, RestrictionSummary, collapse_by_code},
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};
use std::collections::BTreeSet;

pub struct RestrictionService;

impl RestrictionService {
    /// Open-ended restrictions other than FERPA, one per code, with department contacts
    pub async fn get_restrictions<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<Vec<RestrictionSummary>, RuleError> {
        let id: StudentId = student_id.parse()?;

        let rows = restriction::Entity::find()
            .select_only()
            .column(restriction::Column::RstrCode)
            .column(restriction::Column::Severity)
            .column(restriction_code::Column::Description)
            .column(department::Column::DeptName)
            .column(department::Column::DeptEmail)
            .column(department::Column::DeptPhone)
            .join(JoinType::LeftJoin, restriction::Relation::RestrictionCode.def())
            .join(JoinType::LeftJoin, restriction_code::Relation::Department.def())
            .filter(restriction::Column::StuId.eq(id.0))
            .filter(restriction::Column::EndDate.is_null())
            .filter(restriction::Column::RstrCode.ne(FERPA_CODE))
            .into_model::<RestrictionRow>()
            .all(db)
            .await?;

        Ok(collapse_by_code(rows.into_iter().map(RestrictionSummary::from)))
    }

    /// Whether the student has an open-ended FERPA restriction
    pub async fn is_ferpa_restricted<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<bool, RuleError> {
        let id: StudentId = student_id.parse()?;

        let ferpa = restriction::Entity::find()
            .filter(restriction::Column::StuId.eq(id.0))
            .filter(restriction::Column::RstrCode.eq(FERPA_CODE))
            .filter(restriction::Column::EndDate.is_null())
            .one(db)
            .await?;

        Ok(ferpa.is_some())
    }

    /// Names of the departments holding an open-ended registration block, sorted
    pub async fn registration_hold_departments<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<Vec<String>, RuleError> {
        let id: StudentId = student_id.parse()?;

        let rows = restriction::Entity::find()
            .select_only()
            .column(department::Column::DeptName)
            .join(JoinType::LeftJoin, restriction::Relation::RestrictionCode.def())
            .join(JoinType::LeftJoin, restriction_code::Relation::Department.def())
            .filter(restriction::Column::StuId.eq(id.0))
            .filter(restriction::Column::Severity.eq(REGISTRATION_BLOCK_SEVERITY))
            .filter(restriction::Column::EndDate.is_null())
            .distinct()
            .into_model::<DepartmentName>()
            .all(db)
            .await?;

        let names: BTreeSet<String> = rows.into_iter().filter_map(|row| row.dept_name).collect();
        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};
    use std::collections::BTreeMap;

    fn restriction_row(code: &str, severity: i32) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("rstr_code", Value::from(code)),
            ("severity", Value::Int(Some(severity))),
            ("description", Value::from(format!("{code} hold"))),
            ("dept_name", Value::from("Business Office")),
            ("dept_email", Value::from("bursar@example.edu")),
            ("dept_phone", Value::String(None)),
        ])
    }

    fn ferpa(end_date: Option<NaiveDate>) -> restriction::Model {
        restriction::Model {
            rstr_id: 3,
            stu_id: 1001,
            rstr_code: FERPA_CODE.to_string(),
            severity: 0,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date,
        }
    }

    #[tokio::test]
    async fn test_get_restrictions_collapses_codes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                restriction_row("LIB", 10),
                restriction_row("BUS", 99),
                restriction_row("BUS", 40),
            ]])
            .into_connection();

        let restrictions = RestrictionService::get_restrictions(&db, "1001")
            .await
            .unwrap();

        assert_eq!(restrictions.len(), 2);
        assert_eq!(restrictions[0].code, "BUS");
        assert!(restrictions[0].blocks_registration());
        assert_eq!(
            restrictions[0].department_email.as_deref(),
            Some("bursar@example.edu")
        );
        assert_eq!(restrictions[0].department_phone, None);
        assert_eq!(restrictions[1].code, "LIB");
        assert_eq!(restrictions[1].description.as_deref(), Some("LIB hold"));
    }

    #[tokio::test]
    async fn test_restriction_list_excludes_ferpa_and_ended() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![restriction_row("LIB", 10)]])
            .into_connection();

        RestrictionService::get_restrictions(&db, "1001")
            .await
            .unwrap();

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "restriction"."rstr_code", "restriction"."severity", "restriction_code"."description", "department"."dept_name", "department"."dept_email", "department"."dept_phone" FROM "restriction" LEFT JOIN "restriction_code" ON "restriction"."rstr_code" = "restriction_code"."rstr_code" LEFT JOIN "department" ON "restriction_code"."dept_code" = "department"."dept_code" WHERE "restriction"."stu_id" = $1 AND "restriction"."end_date" IS NULL AND "restriction"."rstr_code" <> $2"#,
                [1001i64.into(), "FERPA".into()]
            )]
        );
    }

    #[tokio::test]
    async fn test_no_restrictions() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        assert!(
            RestrictionService::get_restrictions(&db, "1001")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_is_ferpa_restricted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ferpa(None)]])
            .append_query_results([Vec::<restriction::Model>::new()])
            .into_connection();

        assert!(
            RestrictionService::is_ferpa_restricted(&db, "1001")
                .await
                .unwrap()
        );
        assert!(
            !RestrictionService::is_ferpa_restricted(&db, "1001")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_ferpa_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ferpa(None)]])
            .into_connection();

        RestrictionService::is_ferpa_restricted(&db, "1001")
            .await
            .unwrap();

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "restriction"."rstr_id", "restriction"."stu_id", "restriction"."rstr_code", "restriction"."severity", "restriction"."start_date", "restriction"."end_date" FROM "restriction" WHERE "restriction"."stu_id" = $1 AND "restriction"."rstr_code" = $2 AND "restriction"."end_date" IS NULL LIMIT $3"#,
                [1001i64.into(), "FERPA".into(), 1u64.into()]
            )]
        );
    }

    #[tokio::test]
    async fn test_registration_hold_departments() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                BTreeMap::from([("dept_name", Value::from("Registrar"))]),
                BTreeMap::from([("dept_name", Value::String(None))]),
                BTreeMap::from([("dept_name", Value::from("Business Office"))]),
            ]])
            .into_connection();

        let departments = RestrictionService::registration_hold_departments(&db, "1001")
            .await
            .unwrap();
        assert_eq!(departments, vec!["Business Office", "Registrar"]);
    }

    #[tokio::test]
    async fn test_invalid_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for raw in ["", "FERPA"] {
            assert!(matches!(
                RestrictionService::get_restrictions(&db, raw).await,
                Err(RuleError::InvalidArgument(_))
            ));
            assert!(matches!(
                RestrictionService::is_ferpa_restricted(&db, raw).await,
                Err(RuleError::InvalidArgument(_))
            ));
            assert!(matches!(
                RestrictionService::registration_hold_departments(&db, raw).await,
                Err(RuleError::InvalidArgument(_))
            ));
        }
    }
}
