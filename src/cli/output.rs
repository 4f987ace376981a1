//! Output formatting utilities

use crate::application::{CompanySummary, JobView};
use crate::domain::{Application, Job};

/// Format a job listing for display
pub fn format_job_list(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs found".to_string();
    }

    let mut output = String::new();
    for job in jobs {
        let featured = if job.featured { "  [featured]" } else { "" };
        output.push_str(&format!(
            "{}  {}  {}{}\n",
            job.posted_at.format("%d-%m-%Y"),
            job.id,
            job.title,
            featured
        ));
        output.push_str(&format!(
            "            {} | {} | {} | {}\n",
            job.company, job.location, job.job_type, job.salary
        ));
    }
    output
}

/// Format a single job with full details
pub fn format_job_detail(view: &JobView) -> String {
    let job = &view.job;
    let mut output = String::new();

    output.push_str(&format!("{} (id {})\n", job.title, job.id));
    output.push_str(&format!("Company:  {}\n", job.company));
    output.push_str(&format!("Location: {}\n", job.location));
    output.push_str(&format!("Type:     {}\n", job.job_type));
    output.push_str(&format!("Salary:   {}\n", job.salary));
    output.push_str(&format!(
        "Posted:   {}\n",
        job.posted_at.format("%d-%m-%Y")
    ));
    if job.featured {
        output.push_str("Featured: yes\n");
    }
    output.push_str(&format!("\n{}\n", job.description));
    if let Some(requirements) = &job.requirements {
        output.push_str(&format!("\nRequirements:\n{}\n", requirements));
    }
    match view.already_applied {
        Some(true) => output.push_str("\nYou have already applied to this job\n"),
        Some(false) => output.push_str("\nYou have not applied to this job yet\n"),
        None => {}
    }

    output
}

/// Format a list of applications for display
pub fn format_application_list(applications: &[Application]) -> String {
    if applications.is_empty() {
        return "No applications found".to_string();
    }

    let mut output = String::new();
    for app in applications {
        output.push_str(&format!(
            "{}  {}  job {}  {} <{}>  [{}]\n",
            app.applied_at.format("%d-%m-%Y"),
            app.id,
            app.job_id,
            app.candidate_name,
            app.candidate_email,
            app.status
        ));
    }
    output
}

/// Format the company directory for display
pub fn format_company_list(companies: &[CompanySummary]) -> String {
    if companies.is_empty() {
        return "No companies found".to_string();
    }

    let mut output = String::new();
    for company in companies {
        let plural = if company.open_positions == 1 {
            "job"
        } else {
            "jobs"
        };
        output.push_str(&format!(
            "{}  ({})  {} {}\n",
            company.name, company.location, company.open_positions, plural
        ));
    }
    output
}
