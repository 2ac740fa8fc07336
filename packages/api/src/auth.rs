//! # Authentication endpoints
//!
//! Login, registration and password management against `/auth/*`.
//!
//! The login endpoint is not consistent about its response shape. It may
//! return `{ token, user }` or a flat `{ token, userId, rol }`. [`login`]
//! accepts both and fills gaps from the JWT claims, falling back to the
//! identifier the user typed and to the `CLIENTE` role.

use serde::{Deserialize, Serialize};
use store::{Role, User};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::jwt;
use crate::models::{ClientForm, EntityRef};
use crate::resource::require;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    /// Username or email; the API reads both from this field.
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
    user: Option<User>,
    #[serde(
        rename = "userId",
        default,
        deserialize_with = "store::models::id::deserialize_opt"
    )]
    user_id: Option<String>,
    rol: Option<String>,
    username: Option<String>,
    email: Option<String>,
    nombre: Option<String>,
}

impl LoginResponse {
    fn into_session(self, identifier: &str) -> Result<(User, String), ApiError> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("login response carries no token".to_string()))?;

        if let Some(user) = self.user {
            return Ok((user, token));
        }

        let claims = jwt::decode_claims(&token).unwrap_or_default();
        let role = self
            .rol
            .as_deref()
            .and_then(|r| r.parse::<Role>().ok())
            .or_else(|| claims.role())
            .unwrap_or_default();
        let username = self
            .username
            .or_else(|| claims.username().map(str::to_string))
            .unwrap_or_else(|| identifier.to_string());
        let email = self.email.unwrap_or_else(|| {
            if identifier.contains('@') {
                identifier.to_string()
            } else {
                String::new()
            }
        });

        let user = User {
            id: self.user_id.unwrap_or_default(),
            username,
            email,
            role,
            name: self.nombre,
        };
        Ok((user, token))
    }
}

/// Exchange credentials for a user and bearer token.
pub async fn login(gateway: &Gateway, identifier: &str, password: &str) -> Result<(User, String), ApiError> {
    let request = LoginRequest {
        email: identifier.trim().to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = gateway.post("/auth/login", &request).await?;
    let (user, token) = response.into_session(request.email.as_str())?;
    info!("Login accepted for {} as {}", user.username, user.role);
    Ok((user, token))
}

/// Tell the server the session is over. Failures are only logged.
pub async fn logout(gateway: &Gateway) {
    if let Err(e) = gateway.post_empty("/auth/logout").await {
        warn!("Server-side logout failed: {}", e);
    }
}

pub async fn profile(gateway: &Gateway) -> Result<User, ApiError> {
    gateway.get("/auth/profile").await
}

/// Self-registration form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    #[serde(rename = "nombre", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "telefono", skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(rename = "direccion", skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

pub const MIN_PASSWORD_LEN: usize = 6;

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.username, "Username")?;
        require(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err("Email is not valid".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

pub async fn register(gateway: &Gateway, request: &RegisterRequest) -> Result<User, ApiError> {
    gateway.post("/auth/register", request).await
}

/// Register a `CLIENTE` user and create the client record linked to it.
pub async fn register_client(gateway: &Gateway, request: &RegisterRequest) -> Result<User, ApiError> {
    let request = RegisterRequest {
        role: Role::Cliente,
        ..request.clone()
    };
    let user = register(gateway, &request).await?;
    let name = if request.name.trim().is_empty() {
        request.username.clone()
    } else {
        request.name.clone()
    };
    let client = ClientForm {
        name,
        phone: request.phone.clone(),
        email: request.email.clone(),
        address: request.address.clone(),
        user: Some(EntityRef::new(user.id.clone())),
    };
    gateway.post_unit("/clientes", &client).await?;
    info!("Registered client {}", user.username);
    Ok(user)
}

#[derive(Serialize)]
struct PasswordChange<'a> {
    #[serde(rename = "oldPassword")]
    old_password: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

pub async fn update_password(gateway: &Gateway, old_password: &str, new_password: &str) -> Result<(), ApiError> {
    gateway
        .put_unit(
            "/auth/password",
            &PasswordChange {
                old_password,
                new_password,
            },
        )
        .await
}

#[derive(Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

pub async fn request_password_reset(gateway: &Gateway, email: &str) -> Result<(), ApiError> {
    gateway
        .post_unit("/auth/recuperar", &ResetRequest { email })
        .await
}

#[derive(Serialize)]
struct ResetPassword<'a> {
    token: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

pub async fn reset_password(gateway: &Gateway, token: &str, new_password: &str) -> Result<(), ApiError> {
    gateway
        .post_unit(
            "/auth/reset-password",
            &ResetPassword {
                token,
                new_password,
            },
        )
        .await
}
