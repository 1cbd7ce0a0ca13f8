//! Category types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category as exposed to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
