//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use uv_shared::validation::is_valid_email;

use crate::domain::entities::token::TokenPurpose;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{LoginOutcome, RegisterUser, RegistrationOutcome, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::mail::{
    MailTemplates, MailerTrait, PASSWORD_RESET_MAIL_SUBJECT, REGISTRATION_MAIL_SUBJECT,
};
use crate::services::password::PasswordEncoder;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for the complete account lifecycle
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: MailerTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Outbound mail gateway
    mailer: Arc<M>,
    /// Token service for session and link tokens
    token_service: Arc<TokenService>,
    /// One-way password codec
    password_encoder: PasswordEncoder,
    /// HTML mail template loader
    templates: MailTemplates,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: MailerTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        token_service: Arc<TokenService>,
        password_encoder: PasswordEncoder,
        templates: MailTemplates,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            token_service,
            password_encoder,
            templates,
            config,
        }
    }

    /// Register a new account and dispatch the verification email
    ///
    /// Persistence and notification are decoupled: once the record is
    /// created, a mail failure does not fail the operation. The outcome's
    /// `verification_email_sent` flag reports which of the two happened.
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Account created (mail sent or not)
    /// * `Err(DomainError)` - Invalid email, duplicate email, or storage failure
    pub async fn register(&self, input: RegisterUser) -> DomainResult<RegistrationOutcome> {
        if !is_valid_email(&input.email) {
            return Err(DomainError::Auth(AuthError::InvalidEmailFormat));
        }

        let password_hash = self.password_encoder.hash(&input.password)?;
        let user = User::new(
            input.first_name,
            input.middle_name,
            input.last_name,
            input.email,
            password_hash,
            input.address,
            input.mobile_number,
        );

        let user = self.user_repository.create(user).await?;
        info!(user_id = %user.id, "User account created");

        let verification_email_sent = match self.send_verification_mail(&user).await {
            Ok(message_id) => {
                info!(
                    user_id = %user.id,
                    message_id = %message_id,
                    "Verification email dispatched"
                );
                true
            }
            Err(e) => {
                // The account stands; the user can ask for the mail again
                warn!(user_id = %user.id, error = %e, "Verification email dispatch failed");
                false
            }
        };

        Ok(RegistrationOutcome {
            user_id: user.id,
            verification_email_sent,
        })
    }

    /// Mark an account's email as verified from a link token
    ///
    /// The token arrives hex-encoded from the URL path. Expiry and
    /// tampering are distinguished for the caller; a valid token for an
    /// email with no account maps to `NotFound`.
    pub async fn verify_email(&self, token_hex: &str) -> DomainResult<()> {
        let token = self.token_service.decode_from_link(token_hex)?;
        let claims = self
            .token_service
            .validate_link_token(&token, TokenPurpose::EmailVerification)?;

        let updated = self.user_repository.mark_email_verified(&claims.sub).await?;
        if !updated {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        info!(email = %claims.sub, "Email address verified");
        Ok(())
    }

    /// Authenticate an email/password pair and issue a session token
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`
    /// so the response cannot be used to probe which addresses hold
    /// accounts. The account gates are checked in a fixed order:
    /// active first, then verified.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        if !is_valid_email(email) {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(DomainError::Auth(AuthError::InvalidCredentials)),
        };

        if !self.password_encoder.verify(password, &user.password_hash)? {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        if !user.is_active {
            return Err(DomainError::Auth(AuthError::AccountDisabled));
        }
        if !user.is_email_verified {
            return Err(DomainError::Auth(AuthError::EmailNotVerified));
        }

        let profile = UserProfile::from(&user);
        let token = self.token_service.issue_session_token(profile.clone())?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome {
            user: profile,
            token,
        })
    }

    /// Replace the password of an authenticated user
    ///
    /// The caller's identity comes from a validated session token; the
    /// current password is still re-checked before the credential is
    /// replaced.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let user = match self.user_repository.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                return Err(DomainError::NotFound {
                    resource: "user".to_string(),
                })
            }
        };

        if !self
            .password_encoder
            .verify(current_password, &user.password_hash)?
        {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let password_hash = self.password_encoder.hash(new_password)?;
        let updated = self
            .user_repository
            .update_password(user_id, &password_hash)
            .await?;
        if !updated {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Start the password reset flow by mailing a reset link
    ///
    /// Unlike login, this endpoint names an unknown email explicitly:
    /// the caller already claims to own the address, and the original
    /// behavior is kept. Here the mail IS the operation, so a dispatch
    /// failure fails the whole request.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(DomainError::Auth(AuthError::UnknownEmail));
        }

        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(DomainError::Auth(AuthError::UnknownEmail)),
        };

        let token = self
            .token_service
            .issue_link_token(&user.email, TokenPurpose::PasswordReset)?;
        let link = format!(
            "{}{}",
            self.config.reset_link_base,
            self.token_service.encode_for_link(&token)
        );
        let body = self
            .templates
            .reset(&user.full_name(), &link, &self.config.support_email)?;

        match self
            .mailer
            .send_mail(&user.email, PASSWORD_RESET_MAIL_SUBJECT, &body)
            .await
        {
            Ok(message_id) => {
                info!(
                    user_id = %user.id,
                    message_id = %message_id,
                    "Password reset email dispatched"
                );
                Ok(())
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Password reset email dispatch failed");
                Err(DomainError::Auth(AuthError::MailDispatchFailed))
            }
        }
    }

    /// Complete the password reset flow from a link token
    pub async fn reset_password(&self, token_hex: &str, new_password: &str) -> DomainResult<()> {
        let token = self.token_service.decode_from_link(token_hex)?;
        let claims = self
            .token_service
            .validate_link_token(&token, TokenPurpose::PasswordReset)?;

        let password_hash = self.password_encoder.hash(new_password)?;
        let updated = self
            .user_repository
            .update_password_by_email(&claims.sub, &password_hash)
            .await?;
        if !updated {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        info!(email = %claims.sub, "Password reset completed");
        Ok(())
    }

    /// Validate a session token and return its claims
    ///
    /// Thin passthrough so the HTTP layer authenticates requests without
    /// holding its own reference to the token service.
    pub fn validate_session(
        &self,
        token: &str,
    ) -> DomainResult<crate::domain::entities::token::SessionClaims> {
        self.token_service.validate_session_token(token)
    }

    async fn send_verification_mail(&self, user: &User) -> DomainResult<String> {
        let token = self
            .token_service
            .issue_link_token(&user.email, TokenPurpose::EmailVerification)?;
        let link = format!(
            "{}{}",
            self.config.verification_link_base,
            self.token_service.encode_for_link(&token)
        );
        let body = self.templates.welcome(&user.full_name(), &link)?;
        self.mailer
            .send_mail(&user.email, REGISTRATION_MAIL_SUBJECT, &body)
            .await
    }
}
