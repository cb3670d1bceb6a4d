// storefront_cart/src/credentials.rs

//! Form checks run before login or registration requests leave the client.

use thiserror::Error;

pub const MIN_USERNAME_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
  #[error("Username is a required field")]
  UsernameRequired,
  #[error("Username must be at least 6 characters")]
  UsernameTooShort,
  #[error("Password is a required field")]
  PasswordRequired,
  #[error("Password must be at least 6 characters")]
  PasswordTooShort,
  #[error("Passwords do not match")]
  PasswordMismatch,
}

pub fn validate_login(username: &str, password: &str) -> Result<(), CredentialError> {
  if username.is_empty() {
    return Err(CredentialError::UsernameRequired);
  }
  if password.is_empty() {
    return Err(CredentialError::PasswordRequired);
  }
  Ok(())
}

/// Registration rules, checked in order; the first failure is returned.
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<(), CredentialError> {
  if username.is_empty() {
    return Err(CredentialError::UsernameRequired);
  }
  if username.chars().count() < MIN_USERNAME_LEN {
    return Err(CredentialError::UsernameTooShort);
  }
  if password.is_empty() {
    return Err(CredentialError::PasswordRequired);
  }
  if password.chars().count() < MIN_PASSWORD_LEN {
    return Err(CredentialError::PasswordTooShort);
  }
  if password != confirm {
    return Err(CredentialError::PasswordMismatch);
  }
  Ok(())
}
