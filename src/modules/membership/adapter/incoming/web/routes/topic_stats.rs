use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/stats",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
    ),
    responses(
        (status = 200, description = "Member count and creator for the topic"),
        (status = 404, description = "Topic not found"),
    ),
    tag = "topics"
)]
#[get("/api/topics/{topic_id}/stats")]
pub async fn topic_stats_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic_views_use_case.topic_stats(topic_id).await {
        Ok(Some(stats)) => ApiResponse::success(stats),
        Ok(None) => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(topic_id = %topic_id, error = %msg, "Fetching topic stats failed");
            ApiResponse::internal_error()
        }
    }
}
