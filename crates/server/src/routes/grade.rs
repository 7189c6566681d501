use crate::{
    dtos::rules::{GradePointsQuery, GradePointsResponse},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::grade::GradeService;

/// Grade points earned for a letter grade over a number of credits
#[utoipa::path(
    get,
    path = "/grade-points",
    params(GradePointsQuery),
    responses(
        (status = 200, description = "Grade points computed", body = GradePointsResponse),
        (status = 400, description = "Empty grade or invalid credits"),
        (status = 404, description = "Grade is not on the grade scale"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Grades"
)]
pub async fn get_grade_points(
    State(state): State<AppState>,
    Query(params): Query<GradePointsQuery>,
) -> Result<Json<GradePointsResponse>, ApiError> {
    let points = GradeService::grade_points(&state.db, &params.grade, params.credits).await?;

    Ok(Json(GradePointsResponse {
        grade: params.grade.trim().to_string(),
        credits: params.credits,
        points,
    }))
}
