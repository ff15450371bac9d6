mod company;
mod config;
mod error;
mod filter;
mod forms;
mod ids;
mod models;
mod seed;
mod skills;
mod talent;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use company::CompanyDashboard;
use config::Settings;
use error::BoardError;
use filter::{ListingFilter, positions_label};
use models::{Choice, EmploymentType};
use theme::Theme;
use tui::Route;

#[derive(Parser)]
#[command(name = "aiwave")]
#[command(about = "AI talent marketplace - browse and apply for AI roles, or hire for them")]
struct Cli {
    /// Color theme (dark, light)
    #[arg(long, global = true, default_value = "dark")]
    theme: Theme,

    /// Log level written to aiwave.log (RUST_LOG wins when set)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Milliseconds before a submitted application returns to the job list
    #[arg(long, global = true, default_value_t = talent::DEFAULT_RETURN_DELAY.as_millis() as u64)]
    return_delay_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the landing screen
    Home,

    /// Browse jobs and apply as talent
    Apply,

    /// Open the company dashboard
    Hire,

    /// List open positions
    Jobs {
        /// Match title, company, description, or skills
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only these job types (repeatable: full-time, part-time, contract, freelance)
        #[arg(short = 't', long = "type")]
        types: Vec<EmploymentType>,

        /// Only remote positions
        #[arg(short, long)]
        remote: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show applicants for one of the company's listings
    Applicants {
        /// Listing ID (e.g. job1)
        job_id: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(&settings.data_dir)
        .with_context(|| format!("Failed to create {}", settings.data_dir.display()))?;
    let log_path = settings.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let level = &settings.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("aiwave={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn list_jobs(filter: &ListingFilter, json: bool) -> Result<()> {
    let listings = seed::talent_listings();
    let jobs = filter.apply(&listings);

    if json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
        return Ok(());
    }

    if jobs.is_empty() {
        println!("No matching jobs found.");
    } else {
        println!("{:<6} {:<32} {:<22} {:<20} {:<10} {:>20}", "ID", "TITLE", "COMPANY", "LOCATION", "TYPE", "SALARY");
        println!("{}", "-".repeat(115));
        for job in &jobs {
            let location = if job.remote {
                format!("{} (R)", job.location)
            } else {
                job.location.clone()
            };
            println!(
                "{:<6} {:<32} {:<22} {:<20} {:<10} {:>20}",
                job.id,
                truncate(&job.title, 30),
                truncate(&job.company, 20),
                truncate(&location, 18),
                job.employment_type.to_string(),
                job.salary
            );
        }
    }
    println!("\n{}", positions_label(jobs.len()));
    Ok(())
}

fn list_applicants(job_id: &str, json: bool) -> Result<()> {
    let dash = CompanyDashboard::new(
        seed::company_info(),
        seed::company_listings(),
        seed::sample_applicants(),
    );
    let job = dash
        .jobs()
        .iter()
        .find(|j| j.id == job_id)
        .ok_or_else(|| BoardError::UnknownListing(job_id.to_string()))?;
    let applicants = dash.applicants_for(job_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&applicants)?);
        return Ok(());
    }

    println!("{} ({})", job.title, job.id);
    println!("View {} applications\n", job.applicants.unwrap_or(0));
    if applicants.is_empty() {
        println!("No applications received yet.");
        return Ok(());
    }
    println!("{:<6} {:<20} {:<28} {:<12} {:<12} {:<20}", "ID", "NAME", "EMAIL", "EXPERIENCE", "APPLIED", "STATUS");
    println!("{}", "-".repeat(100));
    for a in applicants {
        println!(
            "{:<6} {:<20} {:<28} {:<12} {:<12} {:<20}",
            a.id,
            truncate(&a.name, 18),
            truncate(&a.email, 26),
            a.experience.label(),
            a.applied_date,
            a.status.as_str()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.theme, cli.log_level, cli.return_delay_ms)?;
    init_logging(&settings)?;
    tracing::debug!(?settings, "settings resolved");

    match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => tui::run(&settings, Route::Home)?,
        Commands::Apply => tui::run(&settings, Route::Apply)?,
        Commands::Hire => tui::run(&settings, Route::Hire)?,
        Commands::Jobs {
            query,
            types,
            remote,
            json,
        } => {
            let mut filter = ListingFilter::new();
            filter.query = query;
            filter.types = types.into_iter().collect();
            filter.remote_only = remote;
            list_jobs(&filter, json)?;
        }
        Commands::Applicants { job_id, json } => list_applicants(&job_id, json)?,
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Senior ML Engineer - LLM Specialist", 12), "Senior ML...");
    }

    #[test]
    fn test_cli_parses_repeated_types() {
        let cli = Cli::parse_from(["aiwave", "jobs", "--type", "contract", "-t", "Full-time", "--remote"]);
        match cli.command {
            Some(Commands::Jobs { types, remote, .. }) => {
                assert_eq!(types, vec![EmploymentType::Contract, EmploymentType::FullTime]);
                assert!(remote);
            }
            _ => panic!("expected jobs command"),
        }
        assert_eq!(cli.return_delay_ms, 3000);
        assert_eq!(cli.theme, Theme::Dark);
    }

    #[test]
    fn test_cli_defaults_to_home() {
        let cli = Cli::parse_from(["aiwave", "--theme", "light"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.theme, Theme::Light);
    }

    #[test]
    fn test_unknown_applicants_listing_is_an_error() {
        assert!(list_applicants("job42", true).is_err());
        assert!(list_applicants("job1", true).is_ok());
    }
}
