//! Sample data seeding

use crate::domain::Job;
use crate::error::Result;
use crate::infrastructure::{JobRepository, JsonStore};
use chrono::{Duration, Utc};

/// Service for seeding the board with sample listings
pub struct SeedService {
    jobs: JobRepository,
}

impl SeedService {
    /// Create a new seed service
    pub fn new(store: JsonStore) -> Self {
        SeedService {
            jobs: JobRepository::new(store),
        }
    }

    /// Insert the sample listings. A no-op on a board that already has
    /// jobs; returns the number of jobs inserted.
    pub fn execute(&self) -> Result<usize> {
        if !self.jobs.load_all()?.is_empty() {
            return Ok(0);
        }

        let samples = sample_jobs();
        let count = samples.len();
        for job in samples {
            self.jobs.upsert(job)?;
        }

        Ok(count)
    }
}

struct SampleJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: &'static str,
    salary: &'static str,
    description: &'static str,
    requirements: &'static str,
    featured: bool,
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        title: "Senior Software Engineer",
        company: "TechCorp",
        location: "San Francisco, CA",
        job_type: "Full-time",
        salary: "$120k - $180k",
        description: "Join our engineering team to build scalable web applications using React, Node.js, and cloud technologies. We are looking for someone with 5+ years of experience.",
        requirements: "• 5+ years of React experience\n• Node.js backend development\n• AWS/Cloud experience\n• Strong problem-solving skills",
        featured: true,
    },
    SampleJob {
        title: "Product Manager",
        company: "StartupXYZ",
        location: "New York, NY",
        job_type: "Full-time",
        salary: "$90k - $130k",
        description: "Lead product strategy and work with cross-functional teams to deliver innovative solutions.",
        requirements: "• 3+ years of product management experience\n• Strong analytical skills\n• Experience with agile methodologies",
        featured: false,
    },
    SampleJob {
        title: "UX Designer",
        company: "DesignStudio",
        location: "Remote",
        job_type: "Contract",
        salary: "$70k - $90k",
        description: "Create beautiful and intuitive user experiences for web and mobile applications.",
        requirements: "• 3+ years of UX design experience\n• Proficiency in Figma/Sketch\n• Portfolio showcasing design process",
        featured: true,
    },
    SampleJob {
        title: "DevOps Engineer",
        company: "CloudTech",
        location: "Austin, TX",
        job_type: "Full-time",
        salary: "$100k - $140k",
        description: "Build and maintain CI/CD pipelines and cloud infrastructure for our growing platform.",
        requirements: "• Experience with AWS/Azure\n• Docker and Kubernetes\n• CI/CD pipeline experience\n• Infrastructure as Code",
        featured: false,
    },
    SampleJob {
        title: "Frontend Developer",
        company: "WebSolutions",
        location: "Remote",
        job_type: "Part-time",
        salary: "$60k - $80k",
        description: "Develop responsive web applications using modern JavaScript frameworks.",
        requirements: "• 2+ years React experience\n• HTML, CSS, JavaScript\n• Responsive design skills\n• Git version control",
        featured: true,
    },
    SampleJob {
        title: "Data Scientist",
        company: "DataCorp",
        location: "Seattle, WA",
        job_type: "Full-time",
        salary: "$110k - $160k",
        description: "Analyze complex datasets and build machine learning models to drive business insights.",
        requirements: "• Python and R programming\n• Machine learning experience\n• SQL and database skills\n• Statistics background",
        featured: false,
    },
    SampleJob {
        title: "Marketing Manager",
        company: "GrowthCo",
        location: "Los Angeles, CA",
        job_type: "Full-time",
        salary: "$80k - $110k",
        description: "Lead digital marketing campaigns and grow our online presence across multiple channels.",
        requirements: "• 4+ years marketing experience\n• Google Ads and Analytics\n• Social media marketing\n• Content strategy",
        featured: false,
    },
    SampleJob {
        title: "Mobile App Developer",
        company: "AppStudio",
        location: "Chicago, IL",
        job_type: "Contract",
        salary: "$85k - $115k",
        description: "Build cross-platform mobile applications using React Native or Flutter.",
        requirements: "• React Native or Flutter\n• iOS/Android development\n• API integration\n• App store deployment",
        featured: false,
    },
    SampleJob {
        title: "Full Stack Developer",
        company: "InnovateTech",
        location: "Boston, MA",
        job_type: "Full-time",
        salary: "$95k - $135k",
        description: "Work on both frontend and backend development using modern web technologies.",
        requirements: "• 4+ years full stack experience\n• React and Node.js\n• Database design\n• RESTful API development",
        featured: false,
    },
    SampleJob {
        title: "AI/ML Engineer",
        company: "AITech Solutions",
        location: "Palo Alto, CA",
        job_type: "Full-time",
        salary: "$130k - $190k",
        description: "Develop and deploy machine learning models to solve complex business problems.",
        requirements: "• PhD or Masters in CS/ML\n• TensorFlow/PyTorch experience\n• Deep learning expertise\n• MLOps knowledge",
        featured: true,
    },
];

fn sample_jobs() -> Vec<Job> {
    let now = Utc::now();

    SAMPLE_JOBS
        .iter()
        .enumerate()
        .map(|(i, sample)| Job {
            id: (i + 1).to_string(),
            title: sample.title.to_string(),
            company: sample.company.to_string(),
            location: sample.location.to_string(),
            job_type: sample.job_type.to_string(),
            salary: sample.salary.to_string(),
            description: sample.description.to_string(),
            requirements: Some(sample.requirements.to_string()),
            employer_id: format!("sample-employer-{}", i + 1),
            posted_at: now - Duration::days((i + 1) as i64),
            featured: sample.featured,
        })
        .collect()
}
