use std::path::PathBuf;

use anyhow::{bail, Context};
use careerlink_client::{
    config::{get_config, init_config, LogFormat},
    dto::{
        application_dto::PostApplicationRequest,
        common_dto::ResumeFile,
        job_dto::PostJobRequest,
        user_dto::{LoginRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest},
    },
    models::{
        job::{HiringMultipleCandidates, JobType},
        user::{Niches, Role},
    },
    views::{
        catalog::{JobCard, JobDetail},
        dashboard::sections_for,
        notification::{
            take_application_notice, take_job_notice, take_profile_notice, take_session_error,
            Notification, NotificationKind,
        },
    },
    AppState,
};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "careerlink", about = "Browse and manage the job board", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List jobs, optionally filtered.
    Jobs {
        #[arg(long, default_value = "All")]
        city: String,
        #[arg(long, default_value = "All")]
        niche: String,
        #[arg(long, default_value = "")]
        keyword: String,
    },
    /// Show one job.
    Job { id: String },
    /// Create an account and sign in.
    Register(Registration),
    /// Jobs posted by the signed-in employer.
    MyJobs(Credentials),
    PostJob {
        #[command(flatten)]
        job: JobPosting,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Applications for an employer or by a job seeker, depending on role.
    Applications(Credentials),
    /// Apply to a job with the signed-in job seeker's profile details.
    Apply {
        job_id: String,
        #[arg(long)]
        cover_letter: Option<String>,
        #[arg(long, value_name = "path")]
        resume: Option<PathBuf>,
        #[command(flatten)]
        credentials: Credentials,
    },
    DeleteJob {
        id: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    DeleteApplication {
        id: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show the signed-in user and their dashboard sections.
    Profile(Credentials),
    /// Change profile details. Omitted fields keep their current value.
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "new-email")]
        new_email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        cover_letter: Option<String>,
        #[arg(long, value_delimiter = ',')]
        niches: Vec<String>,
        #[arg(long, value_name = "path")]
        resume: Option<PathBuf>,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Change the password; `--password` is the current one.
    UpdatePassword {
        #[arg(long, env = "CAREERLINK_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
        #[arg(long)]
        confirm_password: Option<String>,
        #[command(flatten)]
        credentials: Credentials,
    },
    Logout(Credentials),
}

#[derive(Debug, Args)]
struct Credentials {
    #[arg(long, value_parser = parse_role)]
    role: Role,
    #[arg(long)]
    email: String,
    #[arg(long, env = "CAREERLINK_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct Registration {
    #[arg(long, value_parser = parse_role)]
    role: Role,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    address: String,
    #[arg(long, env = "CAREERLINK_PASSWORD", hide_env_values = true)]
    password: String,
    /// Three preferred niches, comma separated (job seekers only).
    #[arg(long, value_delimiter = ',')]
    niches: Vec<String>,
    #[arg(long)]
    cover_letter: Option<String>,
    #[arg(long, value_name = "path")]
    resume: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct JobPosting {
    #[arg(long)]
    title: String,
    #[arg(long, value_parser = parse_job_type)]
    job_type: JobType,
    #[arg(long)]
    location: String,
    #[arg(long)]
    company_name: String,
    #[arg(long)]
    introduction: String,
    #[arg(long)]
    responsibilities: String,
    #[arg(long)]
    qualifications: String,
    #[arg(long)]
    offers: Option<String>,
    #[arg(long)]
    salary: String,
    #[arg(long)]
    hiring_multiple: bool,
    #[arg(long)]
    website_title: Option<String>,
    #[arg(long)]
    website_url: Option<String>,
    #[arg(long)]
    niche: String,
}

impl From<JobPosting> for PostJobRequest {
    fn from(job: JobPosting) -> Self {
        Self {
            title: job.title,
            job_type: job.job_type,
            location: job.location,
            company_name: job.company_name,
            introduction: job.introduction,
            responsibilities: job.responsibilities,
            qualifications: job.qualifications,
            offers: job.offers,
            salary: job.salary,
            hiring_multiple_candidates: if job.hiring_multiple {
                HiringMultipleCandidates::Yes
            } else {
                HiringMultipleCandidates::No
            },
            personal_website_title: job.website_title,
            personal_website_url: job.website_url,
            job_niche: job.niche,
        }
    }
}

fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse()
}

fn parse_job_type(raw: &str) -> Result<JobType, String> {
    raw.parse()
}

fn niches_from(values: Vec<String>) -> Option<Niches> {
    if values.is_empty() {
        return None;
    }
    let mut values = values.into_iter().map(|v| v.trim().to_string());
    Some(Niches {
        first_niche: values.next(),
        second_niche: values.next(),
        third_niche: values.next(),
    })
}

async fn resume_from(path: Option<PathBuf>) -> anyhow::Result<Option<ResumeFile>> {
    match path {
        Some(path) => Ok(Some(ResumeFile::from_path(&path).await?)),
        None => Ok(None),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_format);

    let cli = Cli::parse();
    let state = AppState::new(config)?;

    match cli.command {
        Command::Jobs {
            city,
            niche,
            keyword,
        } => {
            state.jobs.fetch_jobs(&city, &niche, &keyword).await;
            announce(take_job_notice(&state.jobs))?;
            let jobs = state.jobs.state().jobs;
            info!("{} job(s) found", jobs.len());
            for job in &jobs {
                let card = JobCard::from(job);
                info!(
                    id = %card.id,
                    badge = card.badge,
                    company = %card.company_name,
                    location = %card.location,
                    salary = %card.salary,
                    posted_on = card.posted_on.as_deref().unwrap_or("-"),
                    "{}",
                    card.title
                );
            }
        }
        Command::Job { id } => {
            state.jobs.fetch_single_job(&id).await;
            let job = state.jobs.state().single_job;
            announce(take_job_notice(&state.jobs))?;
            let job = job.context("Job not returned")?;
            let detail = JobDetail::from(&job);
            info!(niche = %detail.job_niche, salary = %detail.salary, "{}", detail.title);
            for item in &detail.qualifications {
                info!("qualification: {}", item);
            }
            for item in &detail.responsibilities {
                info!("responsibility: {}", item);
            }
            for item in &detail.offers {
                info!("offer: {}", item);
            }
        }
        Command::Register(registration) => {
            let role = registration.role;
            let request = RegisterRequest {
                role,
                name: registration.name,
                email: registration.email,
                phone: registration.phone,
                address: registration.address,
                password: registration.password,
                niches: niches_from(registration.niches),
                cover_letter: registration.cover_letter,
                resume: resume_from(registration.resume).await?,
            };
            state.session.register(request).await;
            announce(take_session_error(&state.session))?;
            report_session_message(&state);
            for section in sections_for(role) {
                info!("section: {}", section.label());
            }
        }
        Command::MyJobs(credentials) => {
            login(&state, credentials, Some(Role::Employer)).await?;
            state.jobs.get_my_jobs().await;
            announce(take_job_notice(&state.jobs))?;
            for job in &state.jobs.state().my_jobs {
                info!(id = %job.id, "{}", job.title);
            }
        }
        Command::PostJob { job, credentials } => {
            login(&state, credentials, Some(Role::Employer)).await?;
            state.jobs.post_job(job.into()).await;
            announce(take_job_notice(&state.jobs))?;
        }
        Command::Applications(credentials) => {
            let role = credentials.role;
            login(&state, credentials, None).await?;
            match role {
                Role::Employer => state.applications.fetch_employer_applications().await,
                Role::JobSeeker => state.applications.fetch_job_seeker_applications().await,
            }
            announce(take_application_notice(&state.applications))?;
            for application in &state.applications.state().applications {
                info!(
                    id = %application.id,
                    applicant = %application.job_seeker_info.name,
                    resume = application.resume_url().unwrap_or("-"),
                    "{}",
                    application.job_info.job_title
                );
            }
        }
        Command::Apply {
            job_id,
            cover_letter,
            resume,
            credentials,
        } => {
            login(&state, credentials, Some(Role::JobSeeker)).await?;
            let user = state.session.state().user.context("No signed-in user")?;
            let mut request = PostApplicationRequest::from_user(&user);
            if let Some(cover_letter) = cover_letter {
                request.cover_letter = cover_letter;
            }
            request.resume = resume_from(resume).await?;
            state.applications.post_application(request, &job_id).await;
            announce(take_application_notice(&state.applications))?;
        }
        Command::DeleteJob { id, credentials } => {
            login(&state, credentials, Some(Role::Employer)).await?;
            state.jobs.delete_job(&id).await;
            announce(take_job_notice(&state.jobs))?;
        }
        Command::DeleteApplication { id, credentials } => {
            login(&state, credentials, None).await?;
            state.applications.delete_application(&id).await;
            announce(take_application_notice(&state.applications))?;
        }
        Command::Profile(credentials) => {
            login(&state, credentials, None).await?;
            state.session.get_current_user().await;
            announce(take_session_error(&state.session))?;
            let user = state.session.state().user.context("No signed-in user")?;
            info!(email = %user.email, role = %user.role, "{}", user.name);
            if let Some(niches) = &user.niches {
                for niche in niches.iter() {
                    info!("niche: {}", niche);
                }
            }
            for section in sections_for(user.role) {
                info!("section: {}", section.label());
            }
        }
        Command::UpdateProfile {
            name,
            new_email,
            phone,
            address,
            cover_letter,
            niches,
            resume,
            credentials,
        } => {
            login(&state, credentials, None).await?;
            let user = state.session.state().user.context("No signed-in user")?;
            let request = UpdateProfileRequest {
                name: name.unwrap_or(user.name),
                email: new_email.unwrap_or(user.email),
                phone: phone.unwrap_or(user.phone),
                address: address.unwrap_or(user.address),
                cover_letter,
                niches: niches_from(niches),
                resume: resume_from(resume).await?,
            };
            state.profile.update_profile(request).await;
            let notice = take_profile_notice(&state.profile, &state.session, "Profile updated.").await;
            announce(notice)?;
        }
        Command::UpdatePassword {
            new_password,
            confirm_password,
            credentials,
        } => {
            let old_password = credentials.password.clone();
            login(&state, credentials, None).await?;
            let request = UpdatePasswordRequest {
                old_password,
                confirm_password: confirm_password.unwrap_or_else(|| new_password.clone()),
                new_password,
            };
            state.profile.update_password(request).await;
            let notice = take_profile_notice(&state.profile, &state.session, "Password updated.").await;
            announce(notice)?;
        }
        Command::Logout(credentials) => {
            login(&state, credentials, None).await?;
            state.session.logout().await;
            announce(take_session_error(&state.session))?;
            report_session_message(&state);
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn login(
    state: &AppState,
    credentials: Credentials,
    required: Option<Role>,
) -> anyhow::Result<()> {
    if let Some(required) = required {
        if credentials.role != required {
            bail!("This command requires the {} role", required);
        }
    }
    state
        .session
        .login(LoginRequest {
            role: credentials.role,
            email: credentials.email,
            password: credentials.password,
        })
        .await;
    announce(take_session_error(&state.session))?;
    report_session_message(state);
    Ok(())
}

/// Logs a notification and turns an error notification into a failed run.
fn announce(notice: Option<Notification>) -> anyhow::Result<()> {
    let Some(notice) = notice else {
        return Ok(());
    };
    match notice.kind {
        NotificationKind::Success => {
            info!("{}", notice.text);
            Ok(())
        }
        NotificationKind::Error => {
            warn!("{}", notice.text);
            bail!("{}", notice.text)
        }
    }
}

fn report_session_message(state: &AppState) {
    if let Some(message) = state.session.state().status.message {
        info!("{}", message);
    }
}
