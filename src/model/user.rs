//! User domain model and authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated user identity.
///
/// The credential hash never leaves the data layer; this model carries only
/// what request handling needs.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    pub fn into_dto(self) -> SessionUserDto {
        SessionUserDto {
            user_id: self.id,
            username: self.username,
        }
    }
}

/// Parameters for inserting a new user row.
///
/// `password_hash` must already be an argon2 PHC string; the repository never
/// sees a plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
}

/// Request body for registration and login.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SessionUserDto {
    pub user_id: i32,
    pub username: String,
}

/// Response for `GET /api/status`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusDto {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl StatusDto {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user_id: None,
            username: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            user_id: Some(user.id),
            username: Some(user.username),
        }
    }
}
