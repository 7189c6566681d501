use crate::{dtos::rules::TagsResponse, error::ApiError, state::AppState};
use axum::{Json, extract::State};
use database::services::student::StudentService;

/// Every distinct tag in use on student records
#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "Sorted tag list", body = TagsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<Json<TagsResponse>, ApiError> {
    let tags = StudentService::tag_list(&state.db).await?;
    Ok(Json(TagsResponse { tags }))
}
