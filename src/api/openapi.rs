use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::{LoginUserRequest, RegisterUserRequest};
use crate::membership::adapter::incoming::web::routes::ProposeTopicRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hackboard API",
        version = "1.0.0",
        description = "Topic board for hackathon team formation: propose a topic, join one, leave one. Everyone is in at most one topic at a time.",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Topic endpoints
        crate::membership::adapter::incoming::web::routes::propose_topic_handler,
        crate::membership::adapter::incoming::web::routes::join_topic_handler,
        crate::membership::adapter::incoming::web::routes::leave_topic_handler,
        crate::membership::adapter::incoming::web::routes::get_topics_handler,
        crate::membership::adapter::incoming::web::routes::unclaimed_topics_handler,
        crate::membership::adapter::incoming::web::routes::get_topic_handler,
        crate::membership::adapter::incoming::web::routes::topic_members_handler,
        crate::membership::adapter::incoming::web::routes::topic_stats_handler,

        // User endpoints
        crate::membership::adapter::incoming::web::routes::unassigned_users_handler,
        crate::membership::adapter::incoming::web::routes::get_me_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RegisterUserRequest,
            LoginUserRequest,
            ProposeTopicRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "topics", description = "Topic proposal and membership"),
        (name = "users", description = "User-centric views"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
