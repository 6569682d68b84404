use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_string_flexible, FileRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Employer")]
    Employer,
    #[serde(rename = "Job Seeker")]
    JobSeeker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::JobSeeker => "Job Seeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "employer" => Ok(Role::Employer),
            "job seeker" | "jobseeker" => Ok(Role::JobSeeker),
            other => Err(format!("unknown role `{}`", other)),
        }
    }
}

/// A job seeker's three ranked category preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Niches {
    #[serde(default)]
    pub first_niche: Option<String>,
    #[serde(default)]
    pub second_niche: Option<String>,
    #[serde(default)]
    pub third_niche: Option<String>,
}

impl Niches {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        Self {
            first_niche: Some(first.into()),
            second_niche: Some(second.into()),
            third_niche: Some(third.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.first_niche, &self.second_niche, &self.third_niche]
            .iter()
            .all(|n| n.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.first_niche, &self.second_niche, &self.third_niche]
            .into_iter()
            .filter_map(|n| n.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub role: Role,
    #[serde(default)]
    pub niches: Option<Niches>,
    #[serde(default)]
    pub resume: Option<FileRef>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
