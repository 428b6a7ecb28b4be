use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::feedback::{AddFeedbackRequest, FeedbackList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Feedback,
    response::ApiResponse,
    services::feedback_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_feedback))
        .route("/mine", get(my_feedback))
}

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = AddFeedbackRequest,
    responses(
        (status = 201, description = "Submit feedback", body = ApiResponse<Feedback>),
        (status = 400, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Feedback"
)]
pub async fn add_feedback(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddFeedbackRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::add_feedback(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/feedback/mine",
    responses(
        (status = 200, description = "List the caller's feedback", body = ApiResponse<FeedbackList>),
    ),
    security(("bearer_auth" = [])),
    tag = "Feedback"
)]
pub async fn my_feedback(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<FeedbackList>>> {
    let resp = feedback_service::list_own_feedback(&state, &user).await?;
    Ok(Json(resp))
}
