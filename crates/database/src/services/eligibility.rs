use crate::{
    entities::{restriction, stu_course_sec, stu_program, student},
    error::RuleError,
    rows::SectionCount,
};
use chrono::{Local, NaiveDate};
use log::debug;
use models::{
    ids::StudentId,
    registration::{RegistrationDecision, RegistrationFacts},
    restriction::REGISTRATION_BLOCK_SEVERITY,
    status::{EnrollmentStatus, ProgramStatus, StudentStatus},
    term::TermCode,
};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect,
    prelude::Expr,
};

/// Decides whether a student may register for courses in a term.
///
/// The three reads behind a decision are issued independently, so a decision
/// is not a consistent snapshot if enrollments or restrictions change while it
/// is being made.
pub struct EligibilityService;

impl EligibilityService {
    pub async fn can_register<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        term: &str,
        max_courses: u32,
    ) -> Result<bool, RuleError> {
        let today = Local::now().date_naive();
        Self::can_register_on(db, student_id, term, max_courses, today).await
    }

    pub async fn can_register_on<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        term: &str,
        max_courses: u32,
        today: NaiveDate,
    ) -> Result<bool, RuleError> {
        let decision =
            Self::evaluate_registration_on(db, student_id, term, max_courses, today).await?;
        Ok(decision.is_allowed())
    }

    /// Evaluates the registration rule and reports which check decided it
    pub async fn evaluate_registration<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        term: &str,
        max_courses: u32,
    ) -> Result<RegistrationDecision, RuleError> {
        let today = Local::now().date_naive();
        Self::evaluate_registration_on(db, student_id, term, max_courses, today).await
    }

    pub async fn evaluate_registration_on<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        term: &str,
        max_courses: u32,
        today: NaiveDate,
    ) -> Result<RegistrationDecision, RuleError> {
        let id: StudentId = student_id.parse()?;
        let term: TermCode = term.parse()?;

        let facts = RegistrationFacts {
            current_courses: Self::current_course_count(db, id, &term).await?,
            has_registration_hold: Self::has_registration_hold(db, id, today).await?,
            is_active: Self::is_active(db, id).await?,
        };

        let decision = RegistrationDecision::evaluate(facts, max_courses);
        debug!("registration for student {id} in {term}: {facts:?} -> {decision:?}");

        Ok(decision)
    }

    /// Number of distinct sections the student currently holds in the term
    async fn current_course_count<C: ConnectionTrait>(
        db: &C,
        id: StudentId,
        term: &TermCode,
    ) -> Result<u64, RuleError> {
        let count = stu_course_sec::Entity::find()
            .select_only()
            .column_as(
                Expr::cust("COUNT(DISTINCT stu_course_sec.course_sec_code)"),
                "courses",
            )
            .filter(stu_course_sec::Column::StuId.eq(id.0))
            .filter(stu_course_sec::Column::TermCode.eq(term.as_str()))
            .filter(stu_course_sec::Column::Status.is_in(EnrollmentStatus::current_codes()))
            .into_model::<SectionCount>()
            .one(db)
            .await?;

        // No row at all means no enrollments
        Ok(count.map_or(0, |c| c.courses.max(0) as u64))
    }

    /// Whether a severity 99 restriction is open-ended or ends after `today`
    async fn has_registration_hold<C: ConnectionTrait>(
        db: &C,
        id: StudentId,
        today: NaiveDate,
    ) -> Result<bool, RuleError> {
        let hold = restriction::Entity::find()
            .filter(restriction::Column::StuId.eq(id.0))
            .filter(restriction::Column::Severity.eq(REGISTRATION_BLOCK_SEVERITY))
            .filter(
                Condition::any()
                    .add(restriction::Column::EndDate.is_null())
                    .add(restriction::Column::EndDate.gt(today)),
            )
            .one(db)
            .await?;

        Ok(hold.is_some())
    }

    /// Active student with at least one active program
    async fn is_active<C: ConnectionTrait>(db: &C, id: StudentId) -> Result<bool, RuleError> {
        let student = student::Entity::find_by_id(id.0)
            .filter(student::Column::Status.eq(StudentStatus::Active.as_str()))
            .inner_join(stu_program::Entity)
            .filter(stu_program::Column::CurrStatus.eq(ProgramStatus::Active.as_str()))
            .one(db)
            .await?;

        Ok(student.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};
    use std::collections::BTreeMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn count_row(courses: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("courses", Value::BigInt(Some(courses)))])
    }

    fn hold(stu_id: i64, end_date: Option<NaiveDate>) -> restriction::Model {
        restriction::Model {
            rstr_id: 1,
            stu_id,
            rstr_code: "BUS".to_string(),
            severity: 99,
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            end_date,
        }
    }

    fn active_student(stu_id: i64) -> student::Model {
        student::Model {
            stu_id,
            status: "A".to_string(),
            tags: None,
            add_date: NaiveDate::from_ymd_opt(2022, 8, 29).unwrap(),
        }
    }

    /// Queues the three reads in the order the rule issues them
    fn mock(
        courses: Option<i64>,
        holds: Vec<restriction::Model>,
        active: Vec<student::Model>,
    ) -> sea_orm::DatabaseConnection {
        let counts: Vec<BTreeMap<&'static str, Value>> =
            courses.into_iter().map(count_row).collect();

        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([counts])
            .append_query_results([holds])
            .append_query_results([active])
            .into_connection()
    }

    #[tokio::test]
    async fn test_student_under_limit_can_register() {
        let db = mock(Some(3), vec![], vec![active_student(1001)]);

        let allowed = EligibilityService::can_register_on(&db, "1001", "202401", 4, today())
            .await
            .unwrap();
        assert!(allowed);
    }

    #[tokio::test]
    async fn test_no_enrollment_rows_counts_as_zero() {
        let db = mock(None, vec![], vec![active_student(1001)]);

        let decision =
            EligibilityService::evaluate_registration_on(&db, "1001", "202401", 4, today())
                .await
                .unwrap();
        assert_eq!(decision, RegistrationDecision::Allowed);
    }

    #[tokio::test]
    async fn test_course_limit_blocks_regardless_of_status() {
        let db = mock(Some(4), vec![], vec![active_student(1001)]);

        let decision =
            EligibilityService::evaluate_registration_on(&db, "1001", "202401", 4, today())
                .await
                .unwrap();
        assert_eq!(decision, RegistrationDecision::CourseLimitReached);

        let db = mock(Some(6), vec![hold(1001, None)], vec![]);
        assert!(
            !EligibilityService::can_register_on(&db, "1001", "202401", 4, today())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_open_ended_hold_blocks_registration() {
        let db = mock(Some(0), vec![hold(1001, None)], vec![active_student(1001)]);

        let decision =
            EligibilityService::evaluate_registration_on(&db, "1001", "202401", 4, today())
                .await
                .unwrap();
        assert_eq!(decision, RegistrationDecision::RegistrationHold);
    }

    #[tokio::test]
    async fn test_count_and_hold_queries() {
        let db = mock(Some(1), vec![], vec![active_student(1001)]);

        EligibilityService::evaluate_registration_on(&db, "1001", "202401", 4, today())
            .await
            .unwrap();

        let log = db.into_transaction_log();
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT COUNT(DISTINCT stu_course_sec.course_sec_code) AS "courses" FROM "stu_course_sec" WHERE "stu_course_sec"."stu_id" = $1 AND "stu_course_sec"."term_code" = $2 AND "stu_course_sec"."status" IN ($3, $4) LIMIT $5"#,
                [
                    1001i64.into(),
                    "202401".into(),
                    "A".into(),
                    "N".into(),
                    1u64.into()
                ]
            )
        );
        // The end date alternatives stay grouped under the severity filter
        assert_eq!(
            log[1],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "restriction"."rstr_id", "restriction"."stu_id", "restriction"."rstr_code", "restriction"."severity", "restriction"."start_date", "restriction"."end_date" FROM "restriction" WHERE "restriction"."stu_id" = $1 AND "restriction"."severity" = $2 AND ("restriction"."end_date" IS NULL OR "restriction"."end_date" > $3) LIMIT $4"#,
                [1001i64.into(), 99i32.into(), today().into(), 1u64.into()]
            )
        );
    }

    #[tokio::test]
    async fn test_inactive_student_cannot_register() {
        let db = mock(Some(1), vec![], vec![]);

        let decision =
            EligibilityService::evaluate_registration_on(&db, "1001", "202401", 4, today())
                .await
                .unwrap();
        assert_eq!(decision, RegistrationDecision::InactiveStatus);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for raw in ["", "abc", "1001a"] {
            assert!(matches!(
                EligibilityService::can_register_on(&db, raw, "202401", 4, today()).await,
                Err(RuleError::InvalidArgument(_))
            ));
        }

        assert!(matches!(
            EligibilityService::can_register_on(&db, "1001", " ", 4, today()).await,
            Err(RuleError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        // Nothing queued: the first read fails
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        assert!(matches!(
            EligibilityService::can_register_on(&db, "1001", "202401", 4, today()).await,
            Err(RuleError::Database(_))
        ));
    }
}
