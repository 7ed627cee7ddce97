//! User domain models.

use serde::{Deserialize, Serialize};

/// User record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(rename = "_id")]
    pub id: String,
    pub clerk_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub email: String,
}

/// User object handed over by the identity provider after sign-in or sign-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityUser {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub image_url: Option<String>,
    pub primary_email: Option<String>,
}

/// Body of `POST /user/save`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
    pub email: String,
    pub clerk_id: String,
}

impl From<&IdentityUser> for SaveUserPayload {
    fn from(user: &IdentityUser) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            full_name: user.full_name.clone().unwrap_or_default(),
            image_url: user.image_url.clone().unwrap_or_default(),
            email: user.primary_email.clone().unwrap_or_default(),
            clerk_id: user.id.clone(),
        }
    }
}

/// Response of `GET /user/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    pub user_exists: bool,
    pub has_goal: bool,
    #[serde(default)]
    pub user: Option<UserData>,
}
