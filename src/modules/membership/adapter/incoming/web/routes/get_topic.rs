use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
    ),
    responses(
        (status = 200, description = "Topic detail with creator and member list"),
        (status = 404, description = "Topic not found"),
    ),
    tag = "topics"
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic_views_use_case.topic_with_members(topic_id).await {
        Ok(Some(topic)) => ApiResponse::success(topic),
        Ok(None) => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(topic_id = %topic_id, error = %msg, "Fetching topic failed");
            ApiResponse::internal_error()
        }
    }
}
