pub mod application_dto;
pub mod common_dto;
pub mod job_dto;
pub mod user_dto;
