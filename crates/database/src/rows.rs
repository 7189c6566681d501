//! Typed shapes for the partial selects issued by the rule services.
//!
//! Every aggregate or projected query decodes into one of these structs via
//! [`FromQueryResult`], so the services never touch raw rows.

use models::restriction::RestrictionSummary;
use sea_orm::FromQueryResult;

/// Result of counting a student's current sections in a term
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SectionCount {
    pub courses: i64,
}

/// A course the student holds completing credit for
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CompletedCourse {
    pub course_code: String,
}

/// A restriction joined with its code description and owning department
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RestrictionRow {
    pub rstr_code: String,
    pub severity: i32,
    pub description: Option<String>,
    pub dept_name: Option<String>,
    pub dept_email: Option<String>,
    pub dept_phone: Option<String>,
}

impl From<RestrictionRow> for RestrictionSummary {
    fn from(row: RestrictionRow) -> Self {
        RestrictionSummary {
            code: row.rstr_code,
            severity: row.severity,
            description: row.description,
            department_name: row.dept_name,
            department_email: row.dept_email,
            department_phone: row.dept_phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DepartmentName {
    pub dept_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct TagColumn {
    pub tags: Option<String>,
}
