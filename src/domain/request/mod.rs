pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod refresh;
pub mod types;

pub use dispatcher::RequestDispatcher;
pub use error::{ApiError, TOKEN_EXPIRED};
pub use refresh::AccessRefresher;
pub use types::{basic_authorization, Auth, Body, Method, MultipartFile, Payload, Request};
