use crate::domain::validation::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationData {
    pub login: String,
    pub email: String,
    pub password: String,
    pub birthdate: String,
    pub nationality: i64,
    pub gender: i64,
}

/// Body of the account confirmation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub token_id: i64,
    pub token: String,
}

impl TokenData {
    /// Builds the body from the two segments of a confirmation link.
    pub fn from_link(id: &str, token: &str) -> Result<Self, ValidationError> {
        let token_id = id
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidTokenId(id.to_string()))?;

        Ok(Self {
            token_id,
            token: token.to_string(),
        })
    }
}

/// The password change form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub user_id: i64,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    pub user_id: i64,
    pub email: String,
    pub actual_password: String,
    pub new_password: String,
}

impl ChangePasswordBody {
    pub fn new(change: &PasswordChange, email: impl Into<String>) -> Self {
        Self {
            user_id: change.user_id,
            email: email.into(),
            actual_password: change.current_password.clone(),
            new_password: change.new_password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_data_from_link() {
        let data = TokenData::from_link("42", "abc-def").unwrap();
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"tokenId": 42, "token": "abc-def"})
        );
    }

    #[test]
    fn test_token_data_rejects_non_numeric_id() {
        assert_eq!(
            TokenData::from_link("forty-two", "abc"),
            Err(ValidationError::InvalidTokenId("forty-two".to_string()))
        );
    }

    #[test]
    fn test_change_password_body_shape() {
        let change = PasswordChange {
            user_id: 5,
            current_password: "OldPassw0rd".to_string(),
            new_password: "NewPassw0rd".to_string(),
            confirm_password: "NewPassw0rd".to_string(),
        };
        let body = ChangePasswordBody::new(&change, "user@milkyway.local");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "userId": 5,
                "email": "user@milkyway.local",
                "actualPassword": "OldPassw0rd",
                "newPassword": "NewPassw0rd"
            })
        );
    }
}
