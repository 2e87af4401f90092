use actix_web::{get, web, Responder};

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Must be registered before the `/api/topics/{topic_id}` route so that
// "unclaimed" is not parsed as a topic id.
#[utoipa::path(
    get,
    path = "/api/topics/unclaimed",
    responses(
        (status = 200, description = "Topics with no current members"),
    ),
    tag = "topics"
)]
#[get("/api/topics/unclaimed")]
pub async fn unclaimed_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic_views_use_case.topics_with_no_members().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(error = %msg, "Listing unclaimed topics failed");
            ApiResponse::internal_error()
        }
    }
}
