use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    pub cover_id: i32,
    pub design_ideas: String,
    pub digital_only: bool,
}
