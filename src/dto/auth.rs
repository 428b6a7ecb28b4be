use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{EMAIL_RE, MOBILE_RE, NAME_RE, USERNAME_RE};

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(regex(path = *USERNAME_RE, message = "username must be at least five letters"))]
    pub username: String,
    #[validate(regex(path = *NAME_RE, message = "first name must contain only letters and spaces"))]
    pub first_name: String,
    #[validate(regex(path = *NAME_RE, message = "last name must contain only letters and spaces"))]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_RE, message = "email must start with a letter and contain '@'"))]
    pub email: String,
    #[validate(regex(path = *MOBILE_RE, message = "mobile must be 10 digits starting with 0"))]
    pub mobile: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}
