use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::membership::application::ports::incoming::use_cases::TopicViewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/members",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
    ),
    responses(
        (status = 200, description = "Current members of the topic"),
        (status = 404, description = "Topic not found"),
    ),
    tag = "topics"
)]
#[get("/api/topics/{topic_id}/members")]
pub async fn topic_members_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    // A missing topic is a 404, never an empty list.
    match data.topic_views_use_case.users_in_topic(topic_id).await {
        Ok(Some(members)) => ApiResponse::success(members),
        Ok(None) => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        Err(TopicViewsError::QueryError(msg)) => {
            tracing::error!(topic_id = %topic_id, error = %msg, "Fetching topic members failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;

    use crate::membership::application::ports::outgoing::{MemberInfo, TopicWithMembers};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTopicViewsUseCase;

    #[tokio::test]
    async fn returns_member_list() {
        let topic_id = Uuid::new_v4();
        let creator = MemberInfo {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let detail = TopicWithMembers {
            id: topic_id,
            title: "Terminal UI toolkit".to_string(),
            description: "Widgets for the terminal".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            creator: creator.clone(),
            members: vec![creator],
        };

        let state = TestAppStateBuilder::default()
            .with_topic_views(StubTopicViewsUseCase::with_topic_detail(detail))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(topic_members_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/topics/{topic_id}/members"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"][0]["name"], "Ada");
    }

    #[tokio::test]
    async fn missing_topic_is_404() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(topic_members_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/topics/{}/members", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
