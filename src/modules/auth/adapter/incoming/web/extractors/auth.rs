use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated identity behind a request. Resolved from the bearer
/// token and handed to use cases as an explicit parameter.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
