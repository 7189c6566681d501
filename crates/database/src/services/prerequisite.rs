use crate::{
    entities::{course, course_sec, stu_acad_cred},
    error::RuleError,
    rows::CompletedCourse,
};
use log::debug;
use models::{
    grade::NON_COMPLETING_GRADES,
    ids::{SectionId, StudentId},
    prerequisite::{PrerequisiteList, PrerequisitePolicy},
    status::EnrollmentStatus,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};
use serde::Serialize;

/// Outcome of checking a student against the prerequisites of a section's course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrerequisiteCheck {
    pub course_code: String,
    /// Distinct prerequisite codes listed on the course
    pub required: Vec<String>,
    /// Listed codes the student has not completed
    pub remaining: Vec<String>,
    pub satisfied: bool,
}

pub struct PrerequisiteService;

impl PrerequisiteService {
    /// Whether the student has completed every prerequisite of the section's course
    pub async fn has_prerequisite<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        course_section_id: &str,
    ) -> Result<bool, RuleError> {
        Self::has_prerequisite_with(db, student_id, course_section_id, PrerequisitePolicy::default())
            .await
    }

    pub async fn has_prerequisite_with<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        course_section_id: &str,
        policy: PrerequisitePolicy,
    ) -> Result<bool, RuleError> {
        let check = Self::check(db, student_id, course_section_id, policy).await?;
        Ok(check.satisfied)
    }

    pub async fn check<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        course_section_id: &str,
        policy: PrerequisitePolicy,
    ) -> Result<PrerequisiteCheck, RuleError> {
        let student: StudentId = student_id.parse()?;
        let section_id: SectionId = course_section_id.parse()?;

        let section = course_sec::Entity::find_by_id(section_id.0)
            .one(db)
            .await?
            .ok_or_else(|| RuleError::not_found("course section", section_id))?;

        let course = course::Entity::find_by_id(section.course_id)
            .one(db)
            .await?
            .ok_or_else(|| RuleError::not_found("course", section.course_id))?;

        let prerequisites = PrerequisiteList::from_column(course.pre_req.as_deref());
        let required: Vec<String> = prerequisites
            .distinct()
            .into_iter()
            .map(str::to_string)
            .collect();

        // Nothing to look up for a course without prerequisites
        if prerequisites.is_empty() {
            return Ok(PrerequisiteCheck {
                course_code: course.course_code,
                required,
                remaining: vec![],
                satisfied: true,
            });
        }

        let completed = Self::completed_courses(db, student, &prerequisites).await?;
        let satisfied = prerequisites.is_satisfied_by(&completed, policy);
        debug!(
            "student {student} prerequisites for {}: required {required:?}, completed {completed:?}, {policy:?} -> {satisfied}",
            course.course_code
        );

        Ok(PrerequisiteCheck {
            course_code: course.course_code,
            remaining: prerequisites.remaining(&completed),
            required,
            satisfied,
        })
    }

    /// Distinct listed courses the student holds completing credit for
    async fn completed_courses<C: ConnectionTrait>(
        db: &C,
        student: StudentId,
        prerequisites: &PrerequisiteList,
    ) -> Result<Vec<String>, RuleError> {
        let rows = stu_acad_cred::Entity::find()
            .select_only()
            .column(stu_acad_cred::Column::CourseCode)
            .filter(stu_acad_cred::Column::StuId.eq(student.0))
            .filter(stu_acad_cred::Column::CourseCode.is_in(prerequisites.distinct()))
            .filter(stu_acad_cred::Column::Status.is_in(EnrollmentStatus::current_codes()))
            .filter(stu_acad_cred::Column::Grade.is_not_null())
            .filter(stu_acad_cred::Column::Grade.is_not_in(NON_COMPLETING_GRADES))
            .group_by(stu_acad_cred::Column::CourseCode)
            .into_model::<CompletedCourse>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(|row| row.course_code).collect())
    }
}
