//! Credential management: signup, login and password reset.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, ResetPasswordDto, SignupDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::user::{CreateUserParam, Role, SignupParam, User},
        service::mail::{password_reset_mail, Mailer},
        util::{
            password::{hash_password, validate_email, validate_password_strength, verify_password},
            token::{generate_reset_token, hash_token},
        },
    },
};

/// Lifetime of a password reset token.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 15;

/// Service for account creation, credential checks and password resets.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a signup form and creates a customer account.
    ///
    /// Emails are stored trimmed and lowercased; usernames trimmed.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::ValidationErr(_))` - Missing fields, password mismatch, bad email
    ///   or weak password
    /// - `Err(AppError::Conflict)` - Email or username already taken
    pub async fn signup(&self, dto: SignupDto) -> Result<User, AppError> {
        let param = Self::validate_signup(dto)?;
        let password_hash = hash_password(param.password).await?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
                role: Role::Customer,
            })
            .await?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    fn validate_signup(dto: SignupDto) -> Result<SignupParam, ValidationError> {
        let (Some(username), Some(email), Some(password), Some(confirm_password)) = (
            non_empty(dto.username),
            non_empty(dto.email),
            non_empty(dto.password),
            non_empty(dto.confirm_password),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        let email = normalize_email(&email);
        validate_email(&email)?;
        validate_password_strength(&password)?;

        Ok(SignupParam {
            username: username.trim().to_string(),
            email,
            password,
        })
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::ValidationErr(MissingCredentials))` - Email or password missing
    /// - `Err(AppError::AuthErr(UnknownEmail))` - No account with that email
    /// - `Err(AppError::AuthErr(InvalidPassword))` - Password does not match
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let (Some(email), Some(password)) = (non_empty(dto.email), non_empty(dto.password)) else {
            return Err(ValidationError::MissingCredentials.into());
        };

        self.verify_credentials(&email, password).await
    }

    /// Looks up a user by email and verifies the password against the stored hash.
    pub async fn verify_credentials(&self, email: &str, password: String) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::UnknownEmail.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidPassword.into());
        }

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(user_id).await
    }

    /// Creates a reset token for a user, replacing any earlier one.
    ///
    /// Only the SHA-256 digest is stored, valid for 15 minutes.
    ///
    /// # Returns
    /// - `Ok(String)` - The plaintext token to deliver to the user
    pub async fn issue_reset_token(&self, user_id: i32) -> Result<String, AppError> {
        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

        UserRepository::new(self.db)
            .set_reset_token(user_id, hash_token(&token), expires_at)
            .await?;

        Ok(token)
    }

    /// Finds the user a presented reset token belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is known and unexpired
    /// - `Ok(None)` - Token is unknown or expired
    pub async fn consume_reset_token(&self, token: &str) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_reset_token(&hash_token(token), Utc::now())
            .await
    }

    /// Sets a new password for a user and clears any pending reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::ValidationErr(WeakPassword))` - Password too weak
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn update_password(&self, user_id: i32, new_password: String) -> Result<(), AppError> {
        validate_password_strength(&new_password)?;
        let password_hash = hash_password(new_password).await?;

        if !UserRepository::new(self.db)
            .update_password(user_id, password_hash)
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Starts a password reset for the account with the given email.
    ///
    /// Unknown or missing emails are not reported to the caller. When delivery of
    /// the reset email fails, the freshly stored token is revoked before the
    /// error is returned so no usable token is left behind.
    ///
    /// # Arguments
    /// - `email` - Address entered on the forgot-password form
    /// - `mailer` - Outgoing mail transport
    /// - `frontend_url` - Base URL of the frontend hosting the reset form
    ///
    /// # Returns
    /// - `Ok(())` - Email sent, or no matching account
    /// - `Err(AppError::MailErr(_))` - Delivery failed; the token was revoked
    pub async fn forgot_password(
        &self,
        email: Option<String>,
        mailer: &Mailer,
        frontend_url: &str,
    ) -> Result<(), AppError> {
        let Some(email) = non_empty(email) else {
            tracing::debug!("Forgot password requested without an email");
            return Ok(());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&normalize_email(&email)).await? else {
            tracing::info!("Forgot password requested for unknown email");
            return Ok(());
        };

        let token = self.issue_reset_token(user.id).await?;
        let reset_url = format!(
            "{}/reset-password?token={}",
            frontend_url.trim_end_matches('/'),
            token
        );

        if let Err(err) = mailer
            .send(password_reset_mail(&user.email, &reset_url))
            .await
        {
            tracing::error!("Failed to send reset email to user {}: {}", user.id, err);
            user_repo
                .clear_reset_token(user.id, &hash_token(&token))
                .await?;
            return Err(err);
        }

        Ok(())
    }

    /// Completes a password reset.
    ///
    /// The token check and the password change happen in one conditional
    /// update, so a token can be redeemed only once.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::ValidationErr(_))` - Missing fields, mismatch or weak password
    /// - `Err(AppError::AuthErr(InvalidResetToken))` - Token unknown, expired or used
    pub async fn reset_password(&self, dto: ResetPasswordDto) -> Result<(), AppError> {
        let (Some(token), Some(password), Some(confirm_password)) = (
            non_empty(dto.token),
            non_empty(dto.password),
            non_empty(dto.confirm_password),
        ) else {
            return Err(ValidationError::MissingFields.into());
        };

        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        validate_password_strength(&password)?;

        let password_hash = hash_password(password).await?;
        let applied = UserRepository::new(self.db)
            .reset_password_with_token(&hash_token(token.trim()), password_hash, Utc::now())
            .await?;

        if !applied {
            return Err(AuthError::InvalidResetToken.into());
        }

        Ok(())
    }
}

/// Treats absent and whitespace-only form values alike.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
