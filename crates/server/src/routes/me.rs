use crate::{
    dtos::me::{NavigationResponse, SectionActionQuery, SectionActionResponse},
    error::ApiError,
    state::AppState,
    views::{registration_link, section_register_action, student_menu},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use database::services::{
    enrollment::EnrollmentService, options::OptionService, student::StudentService,
};
use sea_orm::ConnectionTrait;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// The token subject is the person ID of the signed-in user
fn person_id(claims: &DefaultClaims) -> Result<&str, ApiError> {
    claims.sub.as_deref().ok_or(ApiError::MissingSubject)
}

/// Which navigation entries the signed-in person should see
#[utoipa::path(
    get,
    path = "/me/navigation",
    responses(
        (status = 200, description = "Navigation toggles", body = NavigationResponse),
        (status = 400, description = "Subject is not a person ID"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Current user"
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    claims: Extension<DefaultClaims>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let person = person_id(&claims)?;
    Ok(Json(navigation_for(&state.db, person).await?))
}

pub(crate) async fn navigation_for<C: ConnectionTrait>(
    db: &C,
    person_id: &str,
) -> Result<NavigationResponse, ApiError> {
    let is_student = StudentService::is_student(db, person_id).await?;
    let registration_open = OptionService::registration_open(db).await?;

    Ok(NavigationResponse {
        student_menu: student_menu(is_student),
        registration: registration_link(registration_open, is_student),
    })
}

/// Whether the register action should be offered for a section
#[utoipa::path(
    get,
    path = "/me/sections/{code}",
    params(
        ("code" = String, Path, description = "Course section code"),
        SectionActionQuery
    ),
    responses(
        (status = 200, description = "Register action visibility", body = SectionActionResponse),
        (status = 400, description = "Invalid subject, section code or term"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Current user"
)]
pub async fn get_section_action(
    State(state): State<AppState>,
    claims: Extension<DefaultClaims>,
    Path(code): Path<String>,
    Query(params): Query<SectionActionQuery>,
) -> Result<Json<SectionActionResponse>, ApiError> {
    let person = person_id(&claims)?;
    Ok(Json(
        section_action_for(&state.db, person, &code, &params.term).await?,
    ))
}

pub(crate) async fn section_action_for<C: ConnectionTrait>(
    db: &C,
    person_id: &str,
    section_code: &str,
    term: &str,
) -> Result<SectionActionResponse, ApiError> {
    let enrolled =
        EnrollmentService::is_enrolled_in_section(db, person_id, section_code, term).await?;

    Ok(SectionActionResponse {
        section_code: section_code.trim().to_string(),
        term: term.trim().to_string(),
        register: section_register_action(enrolled),
    })
}
