pub mod avatar;
pub mod error;
pub mod store;
pub mod types;

pub use avatar::{AvatarStore, USER_AVATAR_KEY};
pub use error::StorageError;
pub use store::{SessionStore, USER_DATA_KEY};
pub use types::{
    Achievement, Game, Gender, GeneralSettings, NamedItem, Nationality, Settings, SoundSettings,
    Theme, UserData,
};
