use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::models::job::{HiringMultipleCandidates, Job, JobType};

/// Filter value meaning "no constraint".
pub const ALL_SENTINEL: &str = "All";

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostJobRequest {
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub title: String,
    pub job_type: JobType,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub location: String,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub introduction: String,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub responsibilities: String,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub qualifications: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<String>,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub salary: String,
    pub hiring_multiple_candidates: HiringMultipleCandidates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_website_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Please provide a valid website URL."))]
    pub personal_website_url: Option<String>,
    #[validate(length(min = 1, message = "Please provide full job details."))]
    pub job_niche: String,
}

/// Query for the job listing. Each field is optional; empty strings and the
/// "All" sentinel are dropped when the query is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub city: Option<String>,
    pub niche: Option<String>,
    pub search_keyword: Option<String>,
}

impl JobFilter {
    pub fn new(city: &str, niche: &str, search_keyword: &str) -> Self {
        Self {
            city: constraint(city),
            niche: constraint(niche),
            search_keyword: Some(search_keyword.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(keyword) = &self.search_keyword {
            pairs.push(("searchKeyword", keyword.as_str()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.as_str()));
        }
        if let Some(niche) = &self.niche {
            pairs.push(("niche", niche.as_str()));
        }
        pairs
    }

    pub fn apply_to(&self, url: &mut Url) {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

fn constraint(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == ALL_SENTINEL {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyJobsResponse {
    #[serde(default, rename = "myJobs")]
    pub my_jobs: Vec<Job>,
}
