use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::dto::common_dto::{multipart_form, ResumeFile};
use crate::error::Result;
use crate::models::user::{Niches, Role, User};

#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_register_niches"))]
pub struct RegisterRequest {
    pub role: Role,
    #[validate(length(
        min = 3,
        max = 30,
        message = "Name must contain between 3 and 30 characters."
    ))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide your phone number."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please provide your address."))]
    pub address: String,
    #[validate(length(
        min = 8,
        max = 32,
        message = "Password must contain between 8 and 32 characters."
    ))]
    pub password: String,
    pub niches: Option<Niches>,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeFile>,
}

fn validate_register_niches(req: &RegisterRequest) -> std::result::Result<(), ValidationError> {
    if req.role == Role::JobSeeker && !req.niches.as_ref().is_some_and(Niches::is_complete) {
        return Err(ValidationError::new("niches")
            .with_message(Cow::Borrowed("Please provide your preferred job niches.")));
    }
    Ok(())
}

impl RegisterRequest {
    /// Text parts in wire order. Job seeker extras are only sent for that role.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("role", self.role.as_str().to_string()),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("password", self.password.clone()),
        ];
        if self.role == Role::JobSeeker {
            fields.extend(niche_fields(self.niches.as_ref()));
            fields.push(("coverLetter", self.cover_letter.clone().unwrap_or_default()));
        }
        fields
    }

    pub fn into_form(self) -> Result<Form> {
        let fields = self.form_fields();
        let resume = match self.role {
            Role::JobSeeker => self.resume,
            Role::Employer => None,
        };
        multipart_form(fields, resume)
    }
}

fn niche_fields(niches: Option<&Niches>) -> Vec<(&'static str, String)> {
    let niches = niches.cloned().unwrap_or_default();
    vec![
        ("firstNiche", niches.first_niche.unwrap_or_default()),
        ("secondNiche", niches.second_niche.unwrap_or_default()),
        ("thirdNiche", niches.third_niche.unwrap_or_default()),
    ]
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    pub role: Role,
    #[validate(email(message = "Please provide a valid email."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide your password."))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = 3,
        max = 30,
        message = "Name must contain between 3 and 30 characters."
    ))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email."))]
    pub email: String,
    #[validate(length(min = 1, message = "Please provide your phone number."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Please provide your address."))]
    pub address: String,
    pub cover_letter: Option<String>,
    pub niches: Option<Niches>,
    pub resume: Option<ResumeFile>,
}

impl UpdateProfileRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
        ];
        if let Some(cover_letter) = &self.cover_letter {
            fields.push(("coverLetter", cover_letter.clone()));
        }
        if self.niches.is_some() {
            fields.extend(niche_fields(self.niches.as_ref()));
        }
        fields
    }

    pub fn into_form(self) -> Result<Form> {
        let fields = self.form_fields();
        multipart_form(fields, self.resume)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_password_confirmation"))]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Please provide your current password."))]
    pub old_password: String,
    #[validate(length(
        min = 8,
        max = 32,
        message = "New password must contain between 8 and 32 characters."
    ))]
    pub new_password: String,
    #[validate(length(min = 1, message = "Please confirm your new password."))]
    pub confirm_password: String,
}

fn validate_password_confirmation(
    req: &UpdatePasswordRequest,
) -> std::result::Result<(), ValidationError> {
    if req.new_password != req.confirm_password {
        return Err(ValidationError::new("confirm_password")
            .with_message(Cow::Borrowed("New password & confirm password do not match.")));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}
