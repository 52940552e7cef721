pub mod error;
pub mod rules;

pub use error::ValidationError;
pub use rules::{
    validate_birth_date, validate_email, validate_gender, validate_login, validate_login_data,
    validate_nationality, validate_password_pair, validate_password_update,
    validate_profile_update, validate_registration, validate_strong_password,
    validate_text_name,
};
