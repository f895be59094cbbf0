use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_password() -> String {
    "admin".to_string()
}

fn default_email() -> String {
    "admin@admin.com".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Movie {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 500))]
    pub overview: String,
    #[validate(range(min = 1900, max = 2022))]
    pub year: i32,
    pub rating: f64,
    pub category: String,
}

/// Login credential, held only for the duration of the login request.
#[derive(Debug, Deserialize, Validate)]
pub struct User {
    pub username: Option<String>,
    #[validate(length(min = 5))]
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_email")]
    pub email: String,
    pub full_name: Option<String>,
}

/// Claims embedded in an issued token: the full login credential.
/// No expiry claim is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: Option<String>,
    pub password: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<User> for Claims {
    fn from(user: User) -> Self {
        Claims {
            username: user.username,
            password: user.password,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
