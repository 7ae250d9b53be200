use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A TaskHub user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Timestamp of when the user was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

impl User {
    /// Creates a new `User` with a fresh id and the current time.
    pub fn new(input: CreateUserRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            created_at: Utc::now(),
        }
    }
}
