use crate::{entities::stu_course_sec, error::RuleError};
use log::warn;
use models::{
    ids::{SectionId, StudentId},
    term::TermCode,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Whether the student already holds the section (by code) in the term, in any status
    pub async fn is_enrolled_in_section<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        section_code: &str,
        term: &str,
    ) -> Result<bool, RuleError> {
        let id: StudentId = student_id.parse()?;
        let term: TermCode = term.parse()?;
        let section_code = section_code.trim();

        if section_code.is_empty() {
            warn!("enrollment lookup with an empty section code");
            return Err(RuleError::InvalidArgument(
                "invalid course section code: empty code given".to_string(),
            ));
        }

        let enrollment = stu_course_sec::Entity::find()
            .filter(stu_course_sec::Column::StuId.eq(id.0))
            .filter(stu_course_sec::Column::CourseSecCode.eq(section_code))
            .filter(stu_course_sec::Column::TermCode.eq(term.as_str()))
            .one(db)
            .await?;

        Ok(enrollment.is_some())
    }

    /// Whether anyone is enrolled in the section
    pub async fn section_has_students<C: ConnectionTrait>(
        db: &C,
        course_section_id: &str,
    ) -> Result<bool, RuleError> {
        let section: SectionId = course_section_id.parse()?;

        let enrollment = stu_course_sec::Entity::find()
            .filter(stu_course_sec::Column::CourseSecId.eq(section.0))
            .one(db)
            .await?;

        Ok(enrollment.is_some())
    }
}
