use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginUserRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn map_login_error(err: LoginError, email: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(email = %email, "Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::TokenError(msg) | LoginError::RepositoryError(msg) => {
            tracing::error!(email = %email, error = %msg, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Access token issued"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginUserRequest>,
) -> impl Responder {
    let request = LoginRequest {
        email: payload.email.clone(),
        password: payload.password.clone(),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success(response)
        }
        Err(err) => map_login_error(err, &payload.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::use_cases::login_user::{
        ILoginUserUseCase, LoginUserInfo, LoginUserResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<LoginUserResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn login_returns_access_token() {
        let state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUseCase {
                result: Ok(LoginUserResponse {
                    access_token: "jwt-token".to_string(),
                    user: LoginUserInfo {
                        id: Uuid::new_v4(),
                        email: "ada@example.com".to_string(),
                        name: "Ada".to_string(),
                    },
                }),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "ada@example.com",
                "password": "SecurePass123!"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["access_token"], "jwt-token");
    }

    #[tokio::test]
    async fn login_bad_credentials_is_401() {
        let state = TestAppStateBuilder::default()
            .with_login_user(MockLoginUseCase {
                result: Err(LoginError::InvalidCredentials),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "ada@example.com",
                "password": "wrong"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    }
}
