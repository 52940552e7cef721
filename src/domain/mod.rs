pub mod account;
pub mod datetime;
pub mod image;
pub mod observer;
pub mod profile;
pub mod request;
pub mod session;
pub mod validation;
