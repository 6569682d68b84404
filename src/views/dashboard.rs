use crate::models::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    MyProfile,
    UpdateProfile,
    UpdatePassword,
    PostJob,
    MyJobs,
    Applications,
    MyApplications,
}

impl DashboardSection {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardSection::MyProfile => "My Profile",
            DashboardSection::UpdateProfile => "Update Profile",
            DashboardSection::UpdatePassword => "Update Password",
            DashboardSection::PostJob => "Post New Job",
            DashboardSection::MyJobs => "My Jobs",
            DashboardSection::Applications => "Applications",
            DashboardSection::MyApplications => "My Applications",
        }
    }
}

pub fn sections_for(role: Role) -> Vec<DashboardSection> {
    let mut sections = vec![
        DashboardSection::MyProfile,
        DashboardSection::UpdateProfile,
        DashboardSection::UpdatePassword,
    ];
    match role {
        Role::Employer => sections.extend([
            DashboardSection::PostJob,
            DashboardSection::MyJobs,
            DashboardSection::Applications,
        ]),
        Role::JobSeeker => sections.push(DashboardSection::MyApplications),
    }
    sections
}
