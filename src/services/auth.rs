//! Authentication service

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::rngs::OsRng;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{user::ROLE_ADMIN, NewUser, User, UserClaims},
    repository::Repository,
};

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate user and return a JWT token
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<(String, User)> {
        request.validate()?;

        let user = match self.repository.users_get_by_username(&request.username).await {
            Some(user) => user,
            None => {
                tracing::warn!(username = %request.username, "Login attempt for unknown user");
                return Err(AppError::Authentication("Invalid username or password".to_string()));
            }
        };

        if !self.verify_password(&user, &request.password)? {
            tracing::warn!(username = %request.username, "Login attempt with wrong password");
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        }

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Validate a bearer token
    pub fn decode_token(&self, token: &str) -> AppResult<UserClaims> {
        UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository
            .users_get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Create the configured administrator if the account does not exist yet
    pub async fn ensure_admin(&self) -> AppResult<User> {
        if let Some(user) = self
            .repository
            .users_get_by_username(&self.config.admin_username)
            .await
        {
            return Ok(user);
        }

        let password_hash = self.hash_password(&self.config.admin_password)?;
        let user = self
            .repository
            .users_create(NewUser {
                username: self.config.admin_username.clone(),
                password_hash,
                role: ROLE_ADMIN.to_string(),
            })
            .await;
        tracing::info!(username = %user.username, "Administrator account created");
        Ok(user)
    }

    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.username.clone(),
            user_id: user.id,
            role: user.role.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify user password against the stored argon2 hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
