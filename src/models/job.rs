use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_string_flexible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HiringMultipleCandidates {
    Yes,
    #[default]
    No,
}

impl HiringMultipleCandidates {
    pub fn is_yes(&self) -> bool {
        matches!(self, HiringMultipleCandidates::Yes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "full-time" | "fulltime" => Ok(JobType::FullTime),
            "part-time" | "parttime" => Ok(JobType::PartTime),
            other => Err(format!("unknown job type `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalWebsite {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub offers: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub salary: String,
    #[serde(default)]
    pub hiring_multiple_candidates: HiringMultipleCandidates,
    #[serde(default)]
    pub personal_website: Option<PersonalWebsite>,
    #[serde(default)]
    pub job_niche: String,
    #[serde(default, rename = "jobPostedOn")]
    pub posted_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posted_by: Option<String>,
}
