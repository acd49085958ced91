use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::field(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApplicationError::field(
            "password",
            "password cannot be entirely numeric",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_password;

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("abc123").is_err());
    }

    #[test]
    fn numeric_passwords_are_rejected() {
        assert!(validate_password("1234567890").is_err());
    }

    #[test]
    fn reasonable_passwords_pass() {
        assert!(validate_password("correct horse").is_ok());
    }
}
