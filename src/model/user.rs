use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Signup form. Fields are optional so missing ones surface as a validation
/// error rather than a JSON rejection.
#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct SignupDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct ResetPasswordDto {
    pub token: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}
