pub mod operations;
pub mod types;

pub use operations::{change_password, confirm_account, login_user, register_user, reset_password};
pub use types::{ChangePasswordBody, LoginData, PasswordChange, RegistrationData, TokenData};
