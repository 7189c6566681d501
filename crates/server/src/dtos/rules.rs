use models::{prerequisite::PrerequisitePolicy, registration::RegistrationDecision};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RegistrationQuery {
    /// Defaults to the configured registration term
    pub term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub term: String,
    pub max_courses: u32,
    #[schema(value_type = String, example = "course_limit_reached")]
    pub decision: RegistrationDecision,
    pub allowed: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PrerequisiteQuery {
    /// `exact_set` (default) or `code_count`
    #[param(value_type = Option<String>)]
    #[serde(default)]
    pub policy: PrerequisitePolicy,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrerequisiteResponse {
    pub course_code: String,
    pub required: Vec<String>,
    pub remaining: Vec<String>,
    pub satisfied: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LoadQueryParams {
    /// Term code, may combine two components as `A/B`
    pub term: String,
    pub credits: f64,
    /// Academic level, e.g. `UG`
    pub level: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoadResponse {
    /// Matching load classification, if any rule applies
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GradePointsQuery {
    pub grade: String,
    pub credits: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradePointsResponse {
    pub grade: String,
    pub credits: f64,
    pub points: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}
