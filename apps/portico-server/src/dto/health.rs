//! DTOs for the health endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness report
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Name of the active item repository
    #[schema(example = "memory")]
    pub backend: String,
}
