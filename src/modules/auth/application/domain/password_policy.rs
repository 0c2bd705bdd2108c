pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    Empty,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,

    #[error("Password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,
}

/// Shared by registration and password reset. Length is counted in
/// characters, not bytes, so Bangla passwords are not penalised.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.trim().is_empty() {
        return Err(PasswordPolicyError::Empty);
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooLong);
    }

    Ok(())
}
