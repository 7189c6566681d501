use crate::{
    dtos::{
        rules::{
            LoadQueryParams, LoadResponse, PrerequisiteQuery, PrerequisiteResponse,
            RegistrationQuery, RegistrationResponse,
        },
        student::{
            CartResponse, FerpaResponse, HoldsResponse, ProgramResponse, RestrictionResponse,
            StudentHeaderResponse,
        },
    },
    error::ApiError,
    state::AppState,
    views::{Visibility, yes_no},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::{
    cart::CartService, eligibility::EligibilityService, load::LoadService,
    options::OptionService, prerequisite::PrerequisiteService, restriction::RestrictionService,
    student::StudentService,
};

/// Header data for a student's record
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentHeaderResponse),
        (status = 400, description = "Invalid student ID"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_student_header(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentHeaderResponse>, ApiError> {
    let record = StudentService::get_student(&state.db, &id).await?;
    let ferpa = RestrictionService::is_ferpa_restricted(&state.db, &id).await?;
    let restrictions = RestrictionService::get_restrictions(&state.db, &id).await?;

    Ok(Json(StudentHeaderResponse::new(record, ferpa, restrictions)))
}

#[utoipa::path(
    get,
    path = "/students/{id}/programs",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Academic programs, oldest first", body = Vec<ProgramResponse>),
        (status = 400, description = "Invalid student ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_programs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProgramResponse>>, ApiError> {
    let programs = StudentService::programs(&state.db, &id).await?;
    Ok(Json(programs.into_iter().map(ProgramResponse::from).collect()))
}

/// Whether the student may register in a term, and which check decided it
#[utoipa::path(
    get,
    path = "/students/{id}/registration",
    params(
        ("id" = String, Path, description = "Student ID"),
        RegistrationQuery
    ),
    responses(
        (status = 200, description = "Registration decision", body = RegistrationResponse),
        (status = 400, description = "Invalid student ID or term"),
        (status = 404, description = "Registration options are not configured"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Registration"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RegistrationQuery>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let options = OptionService::registration_options(&state.db).await?;
    let term = params
        .term
        .unwrap_or_else(|| options.registration_term.to_string());

    let decision =
        EligibilityService::evaluate_registration(&state.db, &id, &term, options.max_courses)
            .await?;

    Ok(Json(RegistrationResponse {
        term: term.trim().to_string(),
        max_courses: options.max_courses,
        allowed: decision.is_allowed(),
        decision,
    }))
}

/// Prerequisite check for the course behind a section
#[utoipa::path(
    get,
    path = "/students/{id}/prerequisites/{section_id}",
    params(
        ("id" = String, Path, description = "Student ID"),
        ("section_id" = String, Path, description = "Course section ID"),
        PrerequisiteQuery
    ),
    responses(
        (status = 200, description = "Prerequisite check", body = PrerequisiteResponse),
        (status = 400, description = "Invalid student or section ID"),
        (status = 404, description = "Section or course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Registration"
)]
pub async fn get_prerequisites(
    State(state): State<AppState>,
    Path((id, section_id)): Path<(String, String)>,
    Query(params): Query<PrerequisiteQuery>,
) -> Result<Json<PrerequisiteResponse>, ApiError> {
    let check = PrerequisiteService::check(&state.db, &id, &section_id, params.policy).await?;

    Ok(Json(PrerequisiteResponse {
        course_code: check.course_code,
        required: check.required,
        remaining: check.remaining,
        satisfied: check.satisfied,
    }))
}

/// Open restrictions other than FERPA, one per code
#[utoipa::path(
    get,
    path = "/students/{id}/restrictions",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Restrictions sorted by code", body = Vec<RestrictionResponse>),
        (status = 400, description = "Invalid student ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Restrictions"
)]
pub async fn get_restrictions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RestrictionResponse>>, ApiError> {
    let restrictions = RestrictionService::get_restrictions(&state.db, &id).await?;
    Ok(Json(restrictions.iter().map(RestrictionResponse::from).collect()))
}

/// Departments holding a registration block on the student
#[utoipa::path(
    get,
    path = "/students/{id}/holds",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Registration holds", body = HoldsResponse),
        (status = 400, description = "Invalid student ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Restrictions"
)]
pub async fn get_holds(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HoldsResponse>, ApiError> {
    let departments = RestrictionService::registration_hold_departments(&state.db, &id).await?;

    Ok(Json(HoldsResponse {
        blocked: !departments.is_empty(),
        departments,
    }))
}

#[utoipa::path(
    get,
    path = "/students/{id}/ferpa",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "FERPA flag", body = FerpaResponse),
        (status = 400, description = "Invalid student ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Restrictions"
)]
pub async fn get_ferpa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FerpaResponse>, ApiError> {
    let ferpa = RestrictionService::is_ferpa_restricted(&state.db, &id).await?;

    Ok(Json(FerpaResponse {
        ferpa,
        label: yes_no(ferpa).to_string(),
    }))
}

/// Load classification for a credit total
#[utoipa::path(
    get,
    path = "/students/{id}/load",
    params(
        ("id" = String, Path, description = "Student ID"),
        LoadQueryParams
    ),
    responses(
        (status = 200, description = "Load classification", body = LoadResponse),
        (status = 400, description = "Invalid student ID, term, level or credits"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Registration"
)]
pub async fn get_load(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LoadQueryParams>,
) -> Result<Json<LoadResponse>, ApiError> {
    // Load rules are not per student, but the record has to exist
    StudentService::get_student(&state.db, &id).await?;

    let status =
        LoadService::student_load(&state.db, &params.term, params.credits, &params.level).await?;

    Ok(Json(LoadResponse { status }))
}

#[utoipa::path(
    get,
    path = "/students/{id}/cart",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Registration cart state", body = CartResponse),
        (status = 400, description = "Invalid student ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Registration"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let has_items = CartService::has_items(&state.db, &id).await?;

    Ok(Json(CartResponse {
        has_items,
        cart_link: Visibility::shown_if(has_items),
    }))
}
