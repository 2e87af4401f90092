use actix_web::{get, web, Responder};

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/users/unassigned",
    responses(
        (status = 200, description = "Users not currently in any topic"),
    ),
    tag = "users"
)]
#[get("/api/users/unassigned")]
pub async fn unassigned_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic_views_use_case.users_without_topic().await {
        Ok(users) => ApiResponse::success(users),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(error = %msg, "Listing unassigned users failed");
            ApiResponse::internal_error()
        }
    }
}
