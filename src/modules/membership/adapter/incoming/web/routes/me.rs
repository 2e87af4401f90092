use actix_web::{get, web, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Authenticated user with current topic and authored topics"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Authenticated user no longer exists"),
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
#[get("/api/me")]
pub async fn get_me_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
) -> impl Responder {
    match data.topic_views_use_case.user_with_topic(user.user_id).await {
        Ok(Some(profile)) => ApiResponse::success(profile),
        Ok(None) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(user_id = %user.user_id, error = %msg, "Fetching profile failed");
            ApiResponse::internal_error()
        }
    }
}
