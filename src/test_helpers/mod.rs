use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenClaims;

#[derive(Serialize)]
pub struct RandomAccountResponse {
    email: String,
    name: String,
    password: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_topics: u64,
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

/// Generate random test credentials
/// GET /test/account/random
pub async fn generate_random_account() -> Result<HttpResponse> {
    let ts = Utc::now().timestamp();

    let random_suffix: String = (0..4)
        .map(|_| format!("{:x}", rand::random::<u8>() % 16))
        .collect();

    let email = format!("user{}.{}@example.test", ts, random_suffix);
    let name = format!("user_{}_{}", ts, random_suffix);

    // Password minimum is 8 chars; timestamp plus suffix clears it
    let password = format!("{}_{}", ts, random_suffix);

    Ok(HttpResponse::Ok().json(RandomAccountResponse {
        email,
        name,
        password,
    }))
}

/// Cleanup test data for a user
/// DELETE /test/cleanup/all/{user_id}
pub async fn cleanup_test_user(
    user_id: web::Path<Uuid>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();

    let txn = db.as_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {}", e))
    })?;

    // Evict anyone sitting in the user's topics before the cascade
    txn.execute(Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Postgres,
        "UPDATE users SET current_topic_id = NULL WHERE current_topic_id IN \
         (SELECT id FROM topics WHERE creator_id = $1)",
        vec![user_id.into()],
    ))
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to clear memberships: {}", e))
    })?;

    let topics_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM topics WHERE creator_id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete topics: {}", e))
        })?;

    let user_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete user: {}", e))
        })?;

    if user_result.rows_affected() == 0 {
        txn.rollback().await.ok();
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        })));
    }

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_topics: topics_result.rows_affected(),
        deleted_users: user_result.rows_affected(),
    }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Generate access tokens with various states (Valid, Expired, NotYetValid, InvalidSignature, Malformed)
/// GET /test/token/{token_kind}/{user_id}
pub async fn generate_test_token(path: web::Path<(String, String)>) -> Result<HttpResponse> {
    let (token_kind_str, user_id_str) = path.into_inner();

    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    let valid_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "test-secret".to_string());

    // Intentionally wrong secret for InvalidSignature testing
    let invalid_secret = "wrong-secret";

    let now = Utc::now().timestamp();

    let (claims, secret) = match token_kind {
        TokenKind::Valid => (
            TokenClaims {
                sub: user_id,
                exp: now + 3600,
                iat: now,
                nbf: now,
                token_type: "access".to_string(),
            },
            valid_secret.as_str(),
        ),
        TokenKind::Expired => (
            TokenClaims {
                sub: user_id,
                iat: now - 7200,
                nbf: now - 7200,
                exp: now - 60,
                token_type: "access".to_string(),
            },
            valid_secret.as_str(),
        ),
        TokenKind::NotYetValid => (
            TokenClaims {
                sub: user_id,
                iat: now,
                // Past the 30s verification leeway
                nbf: now + 300,
                exp: now + 3600,
                token_type: "access".to_string(),
            },
            valid_secret.as_str(),
        ),
        TokenKind::InvalidSignature => (
            TokenClaims {
                sub: user_id,
                iat: now,
                nbf: now,
                exp: now + 3600,
                token_type: "access".to_string(),
            },
            invalid_secret,
        ),
        TokenKind::Malformed => {
            let malformed_token = format!("malformed.{}.token", Uuid::new_v4());
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: malformed_token,
            }));
        }
    };

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/account/random", web::get().to(generate_random_account))
            .route(
                "/cleanup/all/{user_id}",
                web::delete().to(cleanup_test_user),
            )
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
