use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::{
    ProposeTopicCommand, ProposeTopicCommandError, ProposeTopicError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for proposing a topic
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProposeTopicRequest {
    /// Topic title (1-200 characters after trimming)
    #[schema(example = "Realtime collaborative whiteboard")]
    pub title: String,

    /// What the team would build
    #[schema(example = "A CRDT-backed whiteboard with live cursors")]
    pub description: String,
}

fn map_command_error(err: ProposeTopicCommandError) -> HttpResponse {
    match err {
        ProposeTopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        ProposeTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must be at most 200 characters")
        }
        ProposeTopicCommandError::EmptyDescription => {
            ApiResponse::bad_request("EMPTY_DESCRIPTION", "Description cannot be empty")
        }
    }
}

fn map_propose_error(err: ProposeTopicError, user_id: uuid::Uuid) -> HttpResponse {
    match &err {
        ProposeTopicError::ProposerNotFound => {
            warn!(user_id = %user_id, "Propose rejected, user does not exist");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        ProposeTopicError::StoreError(msg) => {
            tracing::error!(user_id = %user_id, error = %msg, "Propose topic failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/topics",
    request_body = ProposeTopicRequest,
    responses(
        (status = 201, description = "Topic created, proposer is its first member"),
        (status = 400, description = "Invalid title or description"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Authenticated user no longer exists"),
    ),
    security(("BearerAuth" = [])),
    tag = "topics"
)]
#[post("/api/topics")]
pub async fn propose_topic_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<ProposeTopicRequest>,
) -> impl Responder {
    let command = match ProposeTopicCommand::new(
        user.user_id.into(),
        payload.title.clone(),
        payload.description.clone(),
    ) {
        Ok(command) => command,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Invalid topic proposal");
            return map_command_error(err);
        }
    };

    match data.propose_topic_use_case.execute(command).await {
        Ok(topic) => {
            info!(user_id = %user.user_id, topic_id = %topic.id, "Topic proposed");
            ApiResponse::created(topic)
        }
        Err(err) => map_propose_error(err, user.user_id),
    }
}
