//! User domain models and parameters.
//!
//! Provides the user domain model with its role, and parameter types for registration
//! and the admin user listing.

use chrono::{DateTime, Utc};

use crate::{
    model::{auth::RegisterDto, user::UserDto},
    server::util::pagination::PageRequest,
};

/// Role a user holds. Stored as `admin` / `user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "user",
        }
    }

    /// Parses a stored role; anything other than `admin` is a customer.
    pub fn from_label(label: &str) -> Self {
        match label {
            "admin" => Self::Admin,
            _ => Self::Customer,
        }
    }
}

/// Registered user.
///
/// The password hash stays on the domain model so the auth service can verify logins; it
/// is never copied into a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Experience points earned through purchases.
    pub exp: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            exp: self.exp,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_label(&entity.role),
            exp: entity.exp,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for the admin user listing.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Case-insensitive substring matched against name and email.
    pub search: Option<String>,
    pub page: PageRequest,
}

/// Registration request after DTO conversion.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_code: Option<String>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            admin_code: dto.admin_code.filter(|c| !c.is_empty()),
        }
    }
}
