use actix_web::{get, web, Responder};

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics, newest first, with member counts"),
    ),
    tag = "topics"
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic_views_use_case.all_topics().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(error = %msg, "Listing topics failed");
            ApiResponse::internal_error()
        }
    }
}
