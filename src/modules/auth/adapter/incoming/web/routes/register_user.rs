use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Email address (unique)
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidEmail(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        RegisterUserError::InvalidName(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_NAME", msg)
        }

        RegisterUserError::InvalidPassword(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }

        RegisterUserError::EmailAlreadyRegistered => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_REGISTERED", "Email is already registered")
        }

        RegisterUserError::RepositoryError(msg) => {
            tracing::error!(email = %req.email, error = %msg, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Invalid email, name or password"),
        (status = 409, description = "Email already registered"),
    ),
    tag = "auth"
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let input = RegisterUserInput {
        email: payload.email.clone(),
        name: payload.name.clone(),
        password: payload.password.clone(),
    };

    match data.register_user_use_case.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(user)
        }
        Err(err) => map_register_error(err, &payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::UserRecord;
    use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockRegisterUserUseCase {
        result: Result<UserRecord, RegisterUserError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterUserUseCase {
        async fn execute(
            &self,
            _input: RegisterUserInput,
        ) -> Result<UserRecord, RegisterUserError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn request_body() -> serde_json::Value {
        serde_json::json!({
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "password": "SecurePass123!"
        })
    }

    #[tokio::test]
    async fn register_returns_201_with_user() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            name: "Ada Lovelace".to_string(),
        };

        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterUserUseCase {
                result: Ok(record.clone()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn register_duplicate_email_is_409() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterUserUseCase {
                result: Err(RegisterUserError::EmailAlreadyRegistered),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "EMAIL_ALREADY_REGISTERED");
    }

    #[tokio::test]
    async fn register_invalid_password_is_400() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterUserUseCase {
                result: Err(RegisterUserError::InvalidPassword(
                    "Password must be at least 8 characters".to_string(),
                )),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_PASSWORD");
    }
}
