use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope as documented in the OpenAPI spec
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Error envelope as documented in the OpenAPI spec
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "TOPIC_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Topic not found")]
    pub message: String,
}
