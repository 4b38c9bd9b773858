//! # Auth Backend (OTP mock)
//!
//! The login flow is phone + one-time passcode. There is no credential
//! validation here and hardening is explicitly out of scope: [`MockAuth`]
//! accepts any well-formed 4-digit code after a simulated delay. The
//! [`AuthBackend`] trait keeps the boundary swappable for a real provider.

use crate::catalog::MOCK_DELAY;
use crate::model::User;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

/// Errors from the auth boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// The phone number is malformed. Validation error — fix and resubmit.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The passcode is malformed or wrong. Validation error.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// The auth service could not be reached. Transient — retry.
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),
}

/// Boundary contract for the authentication provider.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Request an OTP for the given phone number.
    async fn send_otp(&self, phone: &str) -> Result<(), AuthError>;

    /// Exchange phone + OTP for the user's identity.
    async fn verify_otp(&self, phone: &str, otp: &str) -> Result<User, AuthError>;
}

/// Mock provider: validates shape only, then returns a canned user.
pub struct MockAuth {
    delay: Duration,
}

impl MockAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new(MOCK_DELAY)
    }
}

/// A phone number is well-formed when it carries at least 10 digits
/// (country prefixes like "+91" are allowed on top).
fn is_well_formed_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    digits >= 10 && phone.chars().all(|c| c.is_ascii_digit() || c == '+')
}

fn is_well_formed_otp(otp: &str) -> bool {
    otp.len() == 4 && otp.chars().all(|c| c.is_ascii_digit())
}

#[async_trait]
impl AuthBackend for MockAuth {
    async fn send_otp(&self, phone: &str) -> Result<(), AuthError> {
        sleep(self.delay).await;
        if !is_well_formed_phone(phone) {
            return Err(AuthError::InvalidPhone(phone.to_string()));
        }
        info!(phone, "OTP sent");
        Ok(())
    }

    async fn verify_otp(&self, phone: &str, otp: &str) -> Result<User, AuthError> {
        sleep(self.delay).await;
        if !is_well_formed_phone(phone) {
            return Err(AuthError::InvalidPhone(phone.to_string()));
        }
        if !is_well_formed_otp(otp) {
            return Err(AuthError::InvalidOtp);
        }
        info!(phone, "OTP verified");
        Ok(User {
            id: "user_1".to_string(),
            name: "Guest".to_string(),
            email: "guest@quickbite.dev".to_string(),
            phone: phone.to_string(),
            avatar: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_auth() -> MockAuth {
        MockAuth::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_any_four_digit_code_is_accepted() {
        let auth = instant_auth();
        auth.send_otp("+919876543210").await.unwrap();
        let user = auth.verify_otp("+919876543210", "0000").await.unwrap();
        assert_eq!(user.phone, "+919876543210");
    }

    #[tokio::test]
    async fn test_malformed_otp_is_rejected() {
        let auth = instant_auth();
        assert_eq!(
            auth.verify_otp("+919876543210", "123").await,
            Err(AuthError::InvalidOtp)
        );
        assert_eq!(
            auth.verify_otp("+919876543210", "12a4").await,
            Err(AuthError::InvalidOtp)
        );
    }

    #[tokio::test]
    async fn test_malformed_phone_is_rejected() {
        let auth = instant_auth();
        assert!(matches!(
            auth.send_otp("12345").await,
            Err(AuthError::InvalidPhone(_))
        ));
        assert!(matches!(
            auth.verify_otp("not-a-phone", "1234").await,
            Err(AuthError::InvalidPhone(_))
        ));
    }
}
