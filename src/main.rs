pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::membership;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::membership::adapter::outgoing::{MembershipStorePostgres, MembershipViewsPostgres};
use crate::membership::application::ports::incoming::use_cases::{
    JoinTopicUseCase, LeaveTopicUseCase, ProposeTopicUseCase, TopicViewsUseCase,
};
use crate::membership::application::services::{
    JoinTopicService, LeaveTopicService, ProposeTopicService, TopicViewsService,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub propose_topic_use_case: Arc<dyn ProposeTopicUseCase + Send + Sync>,
    pub join_topic_use_case: Arc<dyn JoinTopicUseCase + Send + Sync>,
    pub leave_topic_use_case: Arc<dyn LeaveTopicUseCase + Send + Sync>,
    pub topic_views_use_case: Arc<dyn TopicViewsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::application::ports::outgoing::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Refuse to boot with test-helper routes in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!("Test helper routes are ENABLED for environment: {}", env);
    }

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher = Argon2Hasher::from_env();

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case =
        RegisterUserUseCase::new(user_repo, Arc::new(argon2_password_hasher.clone()));
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        Arc::new(argon2_password_hasher),
        Arc::new(jwt_service.clone()),
    );

    let membership_store = MembershipStorePostgres::new(Arc::clone(&db_arc));
    let membership_views = MembershipViewsPostgres::new(Arc::clone(&db_arc));

    let propose_topic_use_case = ProposeTopicService::new(membership_store.clone());
    let join_topic_use_case = JoinTopicService::new(membership_store.clone());
    let leave_topic_use_case = LeaveTopicService::new(membership_store);
    let topic_views_use_case = TopicViewsService::new(membership_views);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        propose_topic_use_case: Arc::new(propose_topic_use_case),
        join_topic_use_case: Arc::new(join_topic_use_case),
        leave_topic_use_case: Arc::new(leave_topic_use_case),
        topic_views_use_case: Arc::new(topic_views_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        let openapi = crate::api::openapi::ApiDoc::openapi();

        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Topics. The static "unclaimed" path must be registered before the
    // parameterized topic routes.
    cfg.service(crate::membership::adapter::incoming::web::routes::unclaimed_topics_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::propose_topic_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::leave_topic_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::join_topic_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::topic_members_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::topic_stats_handler);
    // Users
    cfg.service(crate::membership::adapter::incoming::web::routes::unassigned_users_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::get_me_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
