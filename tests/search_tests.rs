//! Integration tests for job search, filters and sort orders

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::jobdeck_cmd;

fn board_with_jobs() -> TempDir {
    let temp = TempDir::new().unwrap();
    jobdeck_cmd().arg("init").arg(temp.path()).assert().success();

    let jobs = r#"[
  {
    "id": "1",
    "title": "Senior Software Engineer",
    "company": "TechCorp",
    "location": "San Francisco, CA",
    "type": "Full-time",
    "salary": "$120k - $180k",
    "description": "Build scalable web applications",
    "employerId": "e1",
    "postedAt": "2025-01-15T00:00:00Z",
    "featured": true
  },
  {
    "id": "2",
    "title": "Product Manager",
    "company": "StartupXYZ",
    "location": "New York, NY",
    "type": "Full-time",
    "salary": "$90k - $130k",
    "description": "Lead product strategy",
    "employerId": "e2",
    "postedAt": "2025-01-17T00:00:00Z",
    "featured": false
  },
  {
    "id": "3",
    "title": "UX Designer",
    "company": "DesignStudio",
    "location": "Remote",
    "type": "Contract",
    "salary": "$70k - $90k",
    "description": "Create intuitive user experiences",
    "employerId": "e3",
    "postedAt": "2025-01-16T00:00:00Z",
    "featured": true
  }
]"#;
    fs::write(temp.path().join(".jobdeck/jobs.json"), jobs).unwrap();
    temp
}

fn job_titles(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = jobdeck_cmd()
        .current_dir(temp.path())
        .arg("jobs")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .map(|line| {
            // Listing line: "<date>  <id>  <title>[  [featured]]"
            line.splitn(3, "  ")
                .nth(2)
                .unwrap_or("")
                .trim_end_matches("  [featured]")
                .to_string()
        })
        .collect()
}

#[test]
fn test_search_term_matches_case_insensitively() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &["--search", "senior"]);
    assert_eq!(titles, vec!["Senior Software Engineer"]);

    let titles = job_titles(&temp, &["--search", "SENIOR"]);
    assert_eq!(titles, vec!["Senior Software Engineer"]);
}

#[test]
fn test_search_matches_company_and_description() {
    let temp = board_with_jobs();

    let by_company = job_titles(&temp, &["--search", "startupxyz"]);
    assert_eq!(by_company, vec!["Product Manager"]);

    let by_description = job_titles(&temp, &["--search", "intuitive"]);
    assert_eq!(by_description, vec!["UX Designer"]);
}

#[test]
fn test_location_filter_excludes_other_cities() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &["--location", "new york"]);
    assert_eq!(titles, vec!["Product Manager"]);

    let titles = job_titles(&temp, &["--location", "boston"]);
    assert!(titles.is_empty());
}

#[test]
fn test_type_filter_is_exact() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &["--type", "Contract"]);
    assert_eq!(titles, vec!["UX Designer"]);
}

#[test]
fn test_company_filter() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &["--company", "TechCorp"]);
    assert_eq!(titles, vec!["Senior Software Engineer"]);
}

#[test]
fn test_sort_newest_first() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &[]);
    assert_eq!(
        titles,
        vec!["Product Manager", "UX Designer", "Senior Software Engineer"]
    );
}

#[test]
fn test_sort_by_salary_figure() {
    let temp = board_with_jobs();

    // "$120k - $180k" orders as 120180, "$90k - $130k" as 90130,
    // "$70k - $90k" as 7090
    let titles = job_titles(&temp, &["--sort", "salary"]);
    assert_eq!(
        titles,
        vec!["Senior Software Engineer", "Product Manager", "UX Designer"]
    );
}

#[test]
fn test_featured_flag_limits_listing() {
    let temp = board_with_jobs();

    let titles = job_titles(&temp, &["--featured"]);
    assert_eq!(titles, vec!["UX Designer", "Senior Software Engineer"]);
}

#[test]
fn test_invalid_sort_fails() {
    let temp = board_with_jobs();

    jobdeck_cmd()
        .current_dir(temp.path())
        .args(["jobs", "--sort", "oldest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort"));
}

#[test]
fn test_corrupt_jobs_collection_is_an_error() {
    let temp = TempDir::new().unwrap();
    jobdeck_cmd().arg("init").arg(temp.path()).assert().success();
    fs::write(temp.path().join(".jobdeck/jobs.json"), "{{{ not json").unwrap();

    jobdeck_cmd()
        .current_dir(temp.path())
        .arg("jobs")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Corrupt storage for key 'jobs'"));
}

#[test]
fn test_missing_collection_is_empty_not_an_error() {
    let temp = TempDir::new().unwrap();
    jobdeck_cmd().arg("init").arg(temp.path()).assert().success();

    jobdeck_cmd()
        .current_dir(temp.path())
        .arg("jobs")
        .assert()
        .success()
        .stdout(predicate::str::contains("No jobs found"));
}
