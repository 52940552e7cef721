use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidLogin,
    InvalidEmail(String),
    WeakPassword(&'static str),
    PasswordMismatch,
    InvalidName(&'static str),
    InvalidBirthDate,
    InvalidNationality,
    InvalidGender,
    InvalidDate(String),
    InvalidTokenId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidLogin => write!(
                f,
                "Login must be 3 to 45 letters, digits or hyphens"
            ),
            ValidationError::InvalidEmail(email) => {
                write!(f, "It is not a valid email address: {email}")
            }
            ValidationError::WeakPassword(field) => write!(
                f,
                "{field} must have at least 8 characters with a lowercase letter, an uppercase letter and a digit"
            ),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::InvalidName(field) => write!(
                f,
                "{field} must be 3 to 45 letters, digits 1-9, spaces or hyphens"
            ),
            ValidationError::InvalidBirthDate => write!(f, "Invalid birth date"),
            ValidationError::InvalidNationality => write!(f, "Invalid nationality"),
            ValidationError::InvalidGender => write!(f, "Invalid gender"),
            ValidationError::InvalidDate(input) => write!(f, "Invalid date input: {input}"),
            ValidationError::InvalidTokenId(input) => {
                write!(f, "Invalid confirmation token id: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
