use crate::dto::job_dto::ALL_SENTINEL;
use crate::models::job::{Job, PersonalWebsite};
use crate::utils::text::split_list;
use crate::utils::time::date_only;

pub const CITIES: [&str; 20] = [
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Jaipur",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Bhopal",
    "Patna",
    "Ludhiana",
    "Agra",
    "Nashik",
    "Faridabad",
    "Meerut",
    "Varanasi",
];

/// Categories a job can be filed under and a job seeker can rank.
pub const NICHES: [&str; 20] = [
    "Software Development",
    "Web Development",
    "Cybersecurity",
    "Data Science",
    "Artificial Intelligence",
    "Cloud Computing",
    "DevOps",
    "Mobile App Development",
    "Blockchain",
    "Database Administration",
    "Network Administration",
    "UI/UX Design",
    "Game Development",
    "IoT (Internet of Things)",
    "Big Data",
    "Machine Learning",
    "IT Project Management",
    "IT Support and Helpdesk",
    "Systems Administration",
    "IT Consulting",
];

/// City filter choices, led by the "All" sentinel.
pub fn city_filter_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(ALL_SENTINEL).chain(CITIES)
}

/// Niche filter choices, led by the "All" sentinel.
pub fn niche_filter_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(ALL_SENTINEL).chain(NICHES)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: String,
    pub badge: &'static str,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    pub posted_on: Option<String>,
    pub apply_link: String,
}

impl From<&Job> for JobCard {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            badge: if job.hiring_multiple_candidates.is_yes() {
                "Hiring Multiple Candidates"
            } else {
                "Hiring"
            },
            title: job.title.clone(),
            company_name: job.company_name.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            posted_on: job.posted_on.map(date_only),
            apply_link: format!("/post/application/{}", job.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub title: String,
    pub personal_website: Option<PersonalWebsite>,
    pub location: String,
    pub salary: String,
    pub job_type: Option<&'static str>,
    pub introduction: Option<String>,
    pub qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub offers: Vec<String>,
    pub job_niche: String,
}

impl From<&Job> for JobDetail {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            personal_website: job.personal_website.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.map(|t| t.as_str()),
            introduction: job.introduction.clone(),
            qualifications: split_list(&job.qualifications),
            responsibilities: split_list(&job.responsibilities),
            offers: job.offers.as_deref().map(split_list).unwrap_or_default(),
            job_niche: job.job_niche.clone(),
        }
    }
}
