use super::types::{ChangePasswordBody, LoginData, PasswordChange, RegistrationData, TokenData};
use crate::domain::request::{endpoints, Payload, Request, RequestDispatcher};
use crate::domain::session::SessionStore;
use crate::errors::PortalError;

fn url(request_url: &str, path: &str) -> String {
    format!("{request_url}{path}")
}

/// Exchanges credentials for the access cookies.
pub async fn login_user(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    login_data: &LoginData,
) -> Result<Payload, PortalError> {
    let body = serde_json::to_value(login_data)?;
    Ok(dispatcher
        .post(&url(request_url, endpoints::LOGIN), body)
        .await?)
}

pub async fn register_user(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    user: &RegistrationData,
) -> Result<Payload, PortalError> {
    let request = Request::post(url(request_url, endpoints::REGISTER), serde_json::to_value(user)?)
        .public();
    Ok(dispatcher.send_direct(&request).await?)
}

pub async fn confirm_account(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    token: &TokenData,
) -> Result<Payload, PortalError> {
    let request = Request::patch(
        url(request_url, endpoints::CONFIRM_ACCOUNT),
        serde_json::to_value(token)?,
    )
    .public();
    Ok(dispatcher.send_direct(&request).await?)
}

/// Asks the server to mail a password reset link.
pub async fn reset_password(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    email: &str,
) -> Result<Payload, PortalError> {
    let request = Request::post_no_body(url(request_url, &endpoints::reset_password(email))).public();
    Ok(dispatcher.send_direct(&request).await?)
}

/// The email sent along comes from the stored session record.
pub async fn change_password(
    dispatcher: &RequestDispatcher,
    session: &SessionStore,
    request_url: &str,
    change: &PasswordChange,
) -> Result<Payload, PortalError> {
    let email = session
        .load_user_data()
        .and_then(|user| user.email)
        .ok_or(PortalError::SessionMissing)?;

    let body = serde_json::to_value(ChangePasswordBody::new(change, email))?;
    Ok(dispatcher
        .post(&url(request_url, endpoints::CHANGE_PASSWORD), body)
        .await?)
}
