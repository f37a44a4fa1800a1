//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record returned by lookups.
///
/// Not backed by storage: a lookup builds it from the requested name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// User name, exactly as requested
    #[schema(example = "alice")]
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
