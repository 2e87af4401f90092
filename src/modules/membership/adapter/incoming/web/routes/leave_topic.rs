use actix_web::{post, web, Responder};
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::LeaveTopicError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/topics/leave",
    responses(
        (status = 204, description = "User is no longer in any topic"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("BearerAuth" = [])),
    tag = "topics"
)]
#[post("/api/topics/leave")]
pub async fn leave_topic_handler(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
) -> impl Responder {
    match data.leave_topic_use_case.execute(user.user_id.into()).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "User left topic");
            ApiResponse::no_content()
        }
        Err(LeaveTopicError::StoreError(msg)) => {
            tracing::error!(user_id = %user.user_id, error = %msg, "Leave topic failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::membership::application::ports::incoming::use_cases::LeaveTopicUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::token_provider_for;

    struct MockLeaveTopicUseCase {
        result: Result<(), LeaveTopicError>,
    }

    #[async_trait]
    impl LeaveTopicUseCase for MockLeaveTopicUseCase {
        async fn execute(&self, _user: UserId) -> Result<(), LeaveTopicError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn leave_returns_204() {
        let state = TestAppStateBuilder::default()
            .with_leave_topic(MockLeaveTopicUseCase { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(leave_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topics/leave")
            .insert_header(("Authorization", "Bearer stub"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn leave_store_failure_is_500() {
        let state = TestAppStateBuilder::default()
            .with_leave_topic(MockLeaveTopicUseCase {
                result: Err(LeaveTopicError::StoreError("connection reset".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(leave_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topics/leave")
            .insert_header(("Authorization", "Bearer stub"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn leave_without_token_is_401() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(leave_topic_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/topics/leave").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
