use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;
mod find_by_email;
mod find_by_reset_token;
mod reset_password_with_token;
mod set_reset_token;
mod update_password;

fn customer_param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$notarealhashbutlongenoughforthecolumn".to_string(),
        role: Role::Customer,
    }
}
