use crate::{
    entities::{person, stu_program, student},
    error::RuleError,
    rows::TagColumn,
};
use log::debug;
use models::{ids::StudentId, status::StudentStatus, tags::collect_tags};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::str::FromStr;

/// A student row together with the person it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student: student::Model,
    /// Missing only when the person row was removed out from under the student
    pub person: Option<person::Model>,
}

impl StudentRecord {
    pub fn id(&self) -> StudentId {
        StudentId(self.student.stu_id)
    }

    /// Parsed status; `None` for codes this system does not know
    pub fn status(&self) -> Option<StudentStatus> {
        StudentStatus::from_str(&self.student.status).ok()
    }

    pub fn full_name(&self) -> Option<String> {
        self.person
            .as_ref()
            .map(|p| format!("{} {}", p.fname, p.lname))
    }
}

pub struct StudentService;

impl StudentService {
    /// Looks up the student record for a person, `None` if they are not a student
    pub async fn find_student<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<Option<StudentRecord>, RuleError> {
        let id: StudentId = student_id.parse()?;

        let Some(student) = student::Entity::find_by_id(id.0).one(db).await? else {
            debug!("person {id} has no student record");
            return Ok(None);
        };

        let person = person::Entity::find_by_id(id.0).one(db).await?;

        Ok(Some(StudentRecord { student, person }))
    }

    /// Like [`Self::find_student`], but a missing student is an error
    pub async fn get_student<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<StudentRecord, RuleError> {
        Self::find_student(db, student_id)
            .await?
            .ok_or_else(|| RuleError::not_found("student", student_id.trim()))
    }

    /// Whether the person has a student record
    pub async fn is_student<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<bool, RuleError> {
        let id: StudentId = student_id.parse()?;

        Ok(student::Entity::find_by_id(id.0).one(db).await?.is_some())
    }

    /// The student's academic programs, oldest first
    pub async fn programs<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
    ) -> Result<Vec<stu_program::Model>, RuleError> {
        let id: StudentId = student_id.parse()?;

        let programs = stu_program::Entity::find()
            .filter(stu_program::Column::StuId.eq(id.0))
            .order_by_asc(stu_program::Column::StartDate)
            .order_by_asc(stu_program::Column::StuProgId)
            .all(db)
            .await?;

        Ok(programs)
    }

    /// Every distinct tag used on any student, sorted
    pub async fn tag_list<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, RuleError> {
        let columns = student::Entity::find()
            .select_only()
            .column(student::Column::Tags)
            .into_model::<TagColumn>()
            .all(db)
            .await?;

        Ok(collect_tags(columns.iter().map(|c| c.tags.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn student_row(stu_id: i64) -> student::Model {
        student::Model {
            stu_id,
            status: "A".to_string(),
            tags: None,
            add_date: NaiveDate::from_ymd_opt(2022, 8, 29).unwrap(),
        }
    }

    fn person_row(person_id: i64) -> person::Model {
        person::Model {
            person_id,
            fname: "Ada".to_string(),
            lname: "Lovelace".to_string(),
            email: Some("ada@example.edu".to_string()),
            phone: None,
            address1: None,
            address2: None,
            city: None,
            state: None,
            zip: None,
            dob: None,
        }
    }

    #[tokio::test]
    async fn test_find_student() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![student_row(1001)]])
            .append_query_results([vec![person_row(1001)]])
            .into_connection();

        let record = StudentService::find_student(&db, "1001")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.id(), StudentId(1001));
        assert_eq!(record.status(), Some(StudentStatus::Active));
        assert_eq!(record.full_name().as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_missing_student() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<student::Model>::new()])
            .append_query_results([Vec::<student::Model>::new()])
            .into_connection();

        assert!(
            StudentService::find_student(&db, "5")
                .await
                .unwrap()
                .is_none()
        );
        assert!(matches!(
            StudentService::get_student(&db, "5").await,
            Err(RuleError::NotFound { entity: "student", .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_the_database() {
        // No query results are queued, so any query would fail with a database error
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        for raw in ["", "  ", "abc", "10x"] {
            assert!(matches!(
                StudentService::find_student(&db, raw).await,
                Err(RuleError::InvalidArgument(_))
            ));
            assert!(matches!(
                StudentService::is_student(&db, raw).await,
                Err(RuleError::InvalidArgument(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_is_student() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![student_row(7)]])
            .append_query_results([Vec::<student::Model>::new()])
            .into_connection();

        assert!(StudentService::is_student(&db, "7").await.unwrap());
        assert!(!StudentService::is_student(&db, "8").await.unwrap());
    }

    #[tokio::test]
    async fn test_programs() {
        let program = stu_program::Model {
            stu_prog_id: 1,
            stu_id: 1001,
            prog_code: "BSCS".to_string(),
            curr_status: "G".to_string(),
            start_date: NaiveDate::from_ymd_opt(2018, 8, 27).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 5, 14),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![program.clone()]])
            .into_connection();

        let programs = StudentService::programs(&db, "1001").await.unwrap();
        assert_eq!(programs, vec![program]);
    }

    #[tokio::test]
    async fn test_tag_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                BTreeMap::from([("tags", Value::from("honors,athlete"))]),
                BTreeMap::from([("tags", Value::String(None))]),
                BTreeMap::from([("tags", Value::from("athlete, transfer"))]),
            ]])
            .into_connection();

        let tags = StudentService::tag_list(&db).await.unwrap();
        assert_eq!(tags, vec!["athlete", "honors", "transfer"]);
    }
}
