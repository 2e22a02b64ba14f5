use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of an idempotent toggle. `changed` is `false` when the request
/// was already satisfied (or rejected as a self-follow); repeating a toggle
/// is never an error.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
pub struct ToggleResponse {
    pub changed: bool,
}
