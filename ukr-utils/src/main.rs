use std::process::ExitCode;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use ukr_utils::dates;
use ukr_utils::domain::{CalendarDate, DateError, ValidationError};
use ukr_utils::rnokpp;
use ukr_utils::text::{PhoneConfig, normalize_phone};

const USAGE: &str = "\
Usage:
  ukr-utils rnokpp <code>           Validate and decode an RNOKPP
  ukr-utils week <date>             Monday and Sunday of the date's week
  ukr-utils between <begin> <end>   Days from begin to end
  ukr-utils phone <number>          Normalise a phone number";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    debug!(?args, "starting");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(usage)) => {
            eprintln!("{usage}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[&str]) -> Result<(), CliError> {
    match args {
        ["rnokpp", code] => {
            println!("valid:  {}", rnokpp::is_valid(Some(*code)));
            println!("date:   {}", rnokpp::date_of_issue(code)?);
            println!("gender: {}", rnokpp::gender(code)?);
        }
        ["week", date] => {
            let date = require_date(date)?;
            println!("{} - {}", date.week_start()?, date.week_end()?);
        }
        ["between", begin, end] => {
            let begin = dates::parse_date(begin)?;
            let end = dates::parse_date(end)?;
            match dates::days_between(begin, end) {
                Some(days) => println!("{days}"),
                None => return Err(CliError::Usage("both dates are required")),
            }
        }
        ["phone", number] => {
            println!("{}", normalize_phone(number, &PhoneConfig::default()));
        }
        _ => return Err(CliError::Usage(USAGE)),
    }
    Ok(())
}

fn require_date(text: &str) -> Result<CalendarDate, CliError> {
    Ok(text.parse()?)
}
