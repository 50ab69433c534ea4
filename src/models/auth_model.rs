use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::entities::user::{self, UserRole};

#[derive(Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub login_id: String, // Email OR Username

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub password: String,
}

/// The signed-in user as resolved for one request.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    #[serde(skip_serializing)]
    pub id: i64,
    pub public_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<user::Model> for CurrentUser {
    fn from(u: user::Model) -> Self {
        CurrentUser {
            id: u.id,
            public_id: u.public_id,
            username: u.username,
            email: u.email,
            role: u.role,
        }
    }
}

/// Request-scoped identity, inserted by the identity middleware on every
/// route. `None` is an anonymous visitor.
#[derive(Debug, Clone, Default)]
pub struct Viewer(pub Option<CurrentUser>);

impl Viewer {
    pub fn user(&self) -> Option<&CurrentUser> {
        self.0.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(|u| u.id)
    }
}
