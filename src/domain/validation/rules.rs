use super::error::ValidationError;
use crate::domain::account::{LoginData, PasswordChange, RegistrationData};
use crate::domain::datetime::parse_date;
use crate::domain::profile::ProfileData;
use chrono::{Datelike, Utc};

const MIN_TEXT_LEN: usize = 3;
const MAX_TEXT_LEN: usize = 45;
const MIN_PASSWORD_LEN: usize = 8;
const MIN_AGE_YEARS: i32 = 8;
const MAX_AGE_YEARS: i32 = 100;
const NATIONALITY_IDS: std::ops::RangeInclusive<i64> = 1..=252;
const GENDER_IDS: std::ops::RangeInclusive<i64> = 1..=3;

fn length_within(value: &str) -> bool {
    (MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&value.chars().count())
}

pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-';
    if !length_within(login) || !login.chars().all(allowed) {
        return Err(ValidationError::InvalidLogin);
    }
    Ok(())
}

/// Letters, digits 1-9, whitespace and hyphens. `0` is not accepted.
pub fn validate_text_name(name: &str, field: &'static str) -> Result<(), ValidationError> {
    let allowed = |c: char| {
        c.is_ascii_alphabetic() || matches!(c, '1'..='9') || c.is_whitespace() || c == '-'
    };
    if !length_within(name) || !name.chars().all(allowed) {
        return Err(ValidationError::InvalidName(field));
    }
    Ok(())
}

/// `local@domain.tld` without whitespace and with a single `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let has_dotted_domain = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_dotted_domain {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_strong_password(
    password: &str,
    field: &'static str,
) -> Result<(), ValidationError> {
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());

    if !strong {
        return Err(ValidationError::WeakPassword(field));
    }
    Ok(())
}

pub fn validate_password_pair(first: &str, second: &str) -> Result<(), ValidationError> {
    if first != second {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_strong_password(first, "Password")
}

pub fn validate_password_update(change: &PasswordChange) -> Result<(), ValidationError> {
    if change.new_password != change.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_strong_password(&change.current_password, "Current password")?;
    validate_strong_password(&change.new_password, "New password")
}

/// Birth year between 100 and 8 years before the current year.
pub fn validate_birth_date(date: &str) -> Result<(), ValidationError> {
    let parsed = parse_date(date).ok_or(ValidationError::InvalidBirthDate)?;
    let current_year = Utc::now().year();
    let year = parsed.year();

    if year > current_year - MIN_AGE_YEARS || year < current_year - MAX_AGE_YEARS {
        return Err(ValidationError::InvalidBirthDate);
    }
    Ok(())
}

pub fn validate_nationality(nationality_id: i64) -> Result<(), ValidationError> {
    if !NATIONALITY_IDS.contains(&nationality_id) {
        return Err(ValidationError::InvalidNationality);
    }
    Ok(())
}

pub fn validate_gender(gender_id: i64) -> Result<(), ValidationError> {
    if !GENDER_IDS.contains(&gender_id) {
        return Err(ValidationError::InvalidGender);
    }
    Ok(())
}

pub fn validate_login_data(data: &LoginData) -> Result<(), ValidationError> {
    validate_email(&data.email)?;
    validate_strong_password(&data.password, "Password")
}

pub fn validate_registration(
    data: &RegistrationData,
    password_confirmation: &str,
) -> Result<(), ValidationError> {
    validate_login(&data.login)?;
    validate_email(&data.email)?;
    validate_password_pair(&data.password, password_confirmation)?;
    validate_birth_date(&data.birthdate)?;
    validate_nationality(data.nationality)?;
    validate_gender(data.gender)
}

pub fn validate_profile_update(profile: &ProfileData) -> Result<(), ValidationError> {
    validate_text_name(&profile.first_name, "First name")?;
    validate_text_name(&profile.last_name, "Last name")?;
    validate_nationality(profile.nationality.id)?;
    validate_gender(profile.gender.id)?;
    validate_birth_date(&profile.birth_date)
}
