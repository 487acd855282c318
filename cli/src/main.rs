mod config;

use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use job_scraper::{hh::HeadHunter, superjob::SuperJob};
use salary_analyzer::{collect_report, VacancySource};
use thiserror::Error;

use crate::config::{Config, ConfigError};

/// Average salaries of programming languages on hh.ru and superjob.ru in Moscow
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

const PROGRAMMING_LANGUAGES: [&str; 8] = [
    "Python",
    "Java",
    "Javascript",
    "Go",
    "C++",
    "C#",
    "PHP",
    "Ruby",
];

#[derive(Debug, Error)]
enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scraping error: {0}")]
    Scrape(#[from] job_scraper::Error),
}

async fn print_statistics<S>(source: &S) -> Result<(), S::E>
where
    S: VacancySource + Sync,
{
    let report = collect_report(source, PROGRAMMING_LANGUAGES).await?;
    print!("{}", report);
    println!();
    Ok(())
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let client = job_scraper::client()?;

    let hh = HeadHunter::with_base_url(client.clone(), config.hh_base_url);
    print_statistics(&hh).await?;

    let superjob = SuperJob::with_base_url(
        client,
        config.superjob_base_url,
        config.superjob_secret_key,
    );
    print_statistics(&superjob).await?;
    Ok(())
}

fn report_error<W: Write>(error: &Error, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", error)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli = Cli::parse();

    if let Err(e) = run().await {
        log::error!("{}", e);
        // env_logger may be silenced through RUST_LOG
        let _ = report_error(&e, &mut io::stderr());
        std::process::exit(1);
    }
}
