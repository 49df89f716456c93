use crate::dashboard::TimeRange;
use crate::profile::NotificationKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Treats a missing, null or blank string as `None`. HTML forms submit
/// untouched inputs as empty strings.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalPageQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub created: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub range: TimeRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Personal,
    Goals,
    Notifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedSection {
    Profile,
    Goals,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfilePageQuery {
    #[serde(default)]
    pub tab: ProfileTab,
    #[serde(default)]
    pub saved: Option<SavedSection>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub kind: NotificationKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub logged_in: bool,
}
