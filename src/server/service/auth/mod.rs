//! Authentication service.
//!
//! Email/password accounts with argon2 hashes and opaque bearer tokens held in a
//! [`TokenCache`]. The first admin registers with the one-time code logged at startup.

pub mod password;
pub mod token;

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, Role, User},
};

use self::token::TokenCache;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Lifetime of the admin registration code generated at startup.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(30 * 60);

/// Bearer token issued at login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: Duration,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCache<i32>,
    admin_codes: &'a TokenCache<()>,
    token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Bearer token store (token → user id)
    /// - `admin_codes` - One-time admin registration codes
    /// - `token_ttl` - Lifetime of tokens issued at login
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenCache<i32>,
        admin_codes: &'a TokenCache<()>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_codes,
            token_ttl,
        }
    }

    /// Registers a new account.
    ///
    /// A valid admin code makes the account an admin and is consumed; without a code the
    /// account is a customer.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email, short password, or
    ///   email already registered
    /// - `Err(AppError::AuthErr(InvalidAdminCode))` - Code given but unknown or expired
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !is_plausible_email(&param.email) {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }
        if param.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = password::hash_password(&param.password)?;

        let admin_code = match param.admin_code {
            Some(code) => {
                let (_, expires_at) = self
                    .admin_codes
                    .take_with_expiry(&code)
                    .await
                    .ok_or(AuthError::InvalidAdminCode)?;
                Some((code, expires_at))
            }
            None => None,
        };
        let role = if admin_code.is_some() {
            Role::Admin
        } else {
            Role::Customer
        };

        let created = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role,
            })
            .await;

        let user = match created {
            Ok(user) => user,
            Err(e) => {
                // hand the code back for the next attempt
                if let Some((code, expires_at)) = admin_code {
                    self.admin_codes.restore(code, (), expires_at).await;
                }
                return Err(e.into());
            }
        };

        tracing::info!(user_id = user.id, role = role.as_str(), "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token resolving to the user until it expires
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = email.trim().to_lowercase();

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id, self.token_ttl).await;

        Ok(IssuedToken {
            token,
            expires_in: self.token_ttl,
        })
    }

    /// Revokes a bearer token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        self.tokens.revoke(token).await;
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
