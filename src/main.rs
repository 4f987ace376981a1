use clap::Parser;
use jobdeck::application::{
    AccountService, ApplyService, BrowseJobsService, CompaniesService, ConfigService, InitService,
    JobDraft, ManageJobsService, NewAccount, ReviewService, SeedService, SessionService,
};
use jobdeck::cli::{
    format_application_list, format_company_list, format_job_detail, format_job_list, Cli,
    Commands,
};
use jobdeck::domain::{ApplicationStatus, JobFilter, JobSort, UserRole};
use jobdeck::error::JobdeckError;
use jobdeck::infrastructure::JsonStore;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JobdeckError> {
    match cli.command {
        Commands::Init { path, name } => InitService::execute(&path, &name),
        Commands::Config { key, value, list } => {
            let store = JsonStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("name = {}", config.board_name);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jobdeck config [--list | <key> [<value>]]");
                println!("Valid keys: name, created");
                Ok(())
            }
        }
        Commands::Register {
            email,
            password,
            name,
            company,
            role,
        } => {
            let role = UserRole::from_str(&role).map_err(JobdeckError::Config)?;
            let store = JsonStore::discover()?;
            let user = AccountService::new(store).register(NewAccount {
                email,
                password,
                full_name: name,
                company_name: company,
                role,
            })?;
            println!("Registered {} as {}", user.email, user.user_type);
            Ok(())
        }
        Commands::Login { email, password } => {
            let store = JsonStore::discover()?;
            match SessionService::new(store).authenticate(&email, &password)? {
                Some(user) => {
                    println!("Logged in as {} ({})", user.full_name, user.user_type);
                    Ok(())
                }
                None => Err(JobdeckError::AuthenticationFailed),
            }
        }
        Commands::Logout => {
            let store = JsonStore::discover()?;
            SessionService::new(store).clear()?;
            println!("Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let store = JsonStore::discover()?;
            match SessionService::new(store).current()? {
                Some(user) => {
                    println!("{} <{}> ({})", user.full_name, user.email, user.user_type);
                    Ok(())
                }
                None => {
                    println!("Not logged in");
                    Ok(())
                }
            }
        }
        Commands::Post {
            title,
            company,
            location,
            job_type,
            salary,
            description,
            requirements,
            featured,
        } => {
            let store = JsonStore::discover()?;
            let job = ManageJobsService::new(store).post(JobDraft {
                title,
                company,
                location,
                job_type,
                salary,
                description,
                requirements,
                featured,
            })?;
            println!("Posted '{}' (id {})", job.title, job.id);
            Ok(())
        }
        Commands::Jobs {
            search,
            location,
            job_type,
            company,
            sort,
            featured,
        } => {
            let sort = JobSort::from_str(&sort).map_err(JobdeckError::Config)?;
            let filter = JobFilter {
                search,
                location,
                job_type,
                company,
            };

            let store = JsonStore::discover()?;
            let mut jobs = BrowseJobsService::new(store).list(&filter, sort)?;
            if featured {
                jobs.retain(|job| job.featured);
            }

            println!("{}", format_job_list(&jobs).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let store = JsonStore::discover()?;
            let view = BrowseJobsService::new(store).detail(&id)?;
            println!("{}", format_job_detail(&view).trim_end());
            Ok(())
        }
        Commands::Delete { id } => {
            let store = JsonStore::discover()?;
            ManageJobsService::new(store).delete(&id)?;
            println!("Deleted job {}", id);
            Ok(())
        }
        Commands::Apply {
            id,
            cover_letter,
            resume,
        } => {
            let store = JsonStore::discover()?;
            let application = ApplyService::new(store).execute(&id, &cover_letter, resume)?;
            println!(
                "Applied to job {} (application id {})",
                application.job_id, application.id
            );
            Ok(())
        }
        Commands::Applications { job } => {
            let store = JsonStore::discover()?;
            let service = ReviewService::new(store);
            let applications = match job {
                Some(job_id) => service.list_for_job(&job_id)?,
                None => service.list_mine()?,
            };
            println!("{}", format_application_list(&applications).trim_end());
            Ok(())
        }
        Commands::Review { id, status } => {
            let status =
                ApplicationStatus::from_str(&status).map_err(JobdeckError::InvalidStatus)?;
            let store = JsonStore::discover()?;
            ReviewService::new(store).set_status(&id, status)?;
            println!("Application {} marked {}", id, status);
            Ok(())
        }
        Commands::Companies => {
            let store = JsonStore::discover()?;
            let companies = CompaniesService::new(store).execute()?;
            println!("{}", format_company_list(&companies).trim_end());
            Ok(())
        }
        Commands::Seed => {
            let store = JsonStore::discover()?;
            let inserted = SeedService::new(store).execute()?;
            if inserted == 0 {
                println!("Board already has jobs, nothing seeded");
            } else {
                println!("Seeded {} sample jobs", inserted);
            }
            Ok(())
        }
    }
}
