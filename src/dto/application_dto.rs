use reqwest::multipart::Form;
use serde::Deserialize;
use validator::Validate;

use crate::dto::common_dto::{multipart_form, ResumeFile};
use crate::error::Result;
use crate::models::application::Application;
use crate::models::user::User;

#[derive(Debug, Clone, Default, Validate)]
pub struct PostApplicationRequest {
    #[validate(length(min = 1, message = "Please provide your name."))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide your phone number."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please provide your address."))]
    pub address: String,
    #[validate(length(min = 1, message = "Please provide a cover letter."))]
    pub cover_letter: String,
    pub resume: Option<ResumeFile>,
}

impl PostApplicationRequest {
    /// Prefills the form from the signed-in user's profile. The stored resume
    /// stays on the backend; attach a file only to replace it.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            cover_letter: user.cover_letter.clone().unwrap_or_default(),
            resume: None,
        }
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("coverLetter", self.cover_letter.clone()),
        ]
    }

    pub fn into_form(self) -> Result<Form> {
        let fields = self.form_fields();
        multipart_form(fields, self.resume)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub applications: Vec<Application>,
}
