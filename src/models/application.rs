use serde::{Deserialize, Serialize};

use super::user::Role;
use super::{deserialize_string_flexible, FileRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_flexible")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub resume: Option<FileRef>,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    #[serde(default)]
    pub job_id: Option<String>,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_seeker_info: JobSeekerInfo,
    #[serde(default)]
    pub employer_info: Option<EmployerInfo>,
    pub job_info: JobInfo,
}

impl Application {
    pub fn resume_url(&self) -> Option<&str> {
        self.job_seeker_info.resume.as_ref().map(|r| r.url.as_str())
    }
}
