use crate::domain::datetime::transform_to_timestamp;
use crate::domain::request::endpoints;
use crate::domain::session::{Gender, GeneralSettings, Nationality, SoundSettings, UserData};
use crate::domain::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// The profile editor form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub id: i64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub nationality: Nationality,
    pub gender: Gender,
}

impl ProfileData {
    /// Pre-fills the form from the session record. `None` when the record
    /// lacks an id, a nationality or a gender.
    pub fn from_user_data(user: &UserData) -> Option<Self> {
        Some(Self {
            id: user.id?,
            login: user.login.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            birth_date: user.birth_date.clone().unwrap_or_default(),
            nationality: user.nationality.clone()?,
            gender: user.gender.clone()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateBody {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: String,
    pub nationality_id: i64,
    pub gender_id: i64,
}

impl TryFrom<&ProfileData> for ProfileUpdateBody {
    type Error = ValidationError;

    fn try_from(profile: &ProfileData) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: profile.id,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            birthdate: transform_to_timestamp(&profile.birth_date)?,
            nationality_id: profile.nationality.id,
            gender_id: profile.gender.id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdateBody {
    pub user_id: Option<i64>,
    pub general: GeneralSettings,
    pub sound: SoundSettings,
}

impl SettingsUpdateBody {
    pub fn new(general: &GeneralSettings, sound: &SoundSettings) -> Self {
        Self {
            user_id: general.user_id,
            general: general.clone(),
            sound: sound.clone(),
        }
    }
}

/// Public lists used to fill the form selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceList {
    Genders,
    Nationalities,
    Themes,
}

impl ReferenceList {
    pub fn path(&self) -> &'static str {
        match self {
            ReferenceList::Genders => endpoints::GENDERS,
            ReferenceList::Nationalities => endpoints::NATIONALITIES,
            ReferenceList::Themes => endpoints::THEMES,
        }
    }
}
