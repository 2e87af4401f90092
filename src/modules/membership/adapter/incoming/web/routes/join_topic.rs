use actix_web::{post, web, HttpResponse, Responder};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::JoinTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_join_error(err: JoinTopicError, user_id: Uuid, topic_id: Uuid) -> HttpResponse {
    match &err {
        JoinTopicError::TopicNotFound => {
            warn!(user_id = %user_id, topic_id = %topic_id, "Join rejected, topic does not exist");
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        JoinTopicError::UserNotFound => {
            warn!(user_id = %user_id, topic_id = %topic_id, "Join rejected, user does not exist");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        JoinTopicError::StoreError(msg) => {
            tracing::error!(user_id = %user_id, topic_id = %topic_id, error = %msg, "Join topic failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/join",
    params(
        ("topic_id" = Uuid, Path, description = "Topic to join"),
    ),
    responses(
        (status = 200, description = "User is now a member of the topic"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Topic or user not found"),
    ),
    security(("BearerAuth" = [])),
    tag = "topics"
)]
#[post("/api/topics/{topic_id}/join")]
pub async fn join_topic_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .join_topic_use_case
        .execute(user.user_id.into(), topic_id)
        .await
    {
        Ok(topic) => {
            info!(user_id = %user.user_id, topic_id = %topic_id, "User joined topic");
            ApiResponse::success(topic)
        }
        Err(err) => map_join_error(err, user.user_id, topic_id),
    }
}
