use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_SESSION_ID: &str = "default";
pub const MAX_SESSION_ID_LENGTH: usize = 128;

/// Identifies whose meal history an operation reads or writes.
///
/// There is no authentication behind it: two clients sending the same id
/// share the same history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct SessionId(String);

impl SessionId {
    /// Parses a raw header value. Blank values resolve to the default session.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        if trimmed.chars().count() > MAX_SESSION_ID_LENGTH {
            return Err(CoreError::Validation(format!(
                "session id must be at most {} characters",
                MAX_SESSION_ID_LENGTH
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION_ID.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
