use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gcal_holidays::{HolidayQuery, render};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "gcal-holidays",
    version,
    about = "List public holidays from Google Calendar's country holiday calendars"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch holidays for a country and print them.
    List(ListArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Json,
    Csv,
    Text,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Holiday calendar code (e.g., US, german, uk). Case does not matter.
    #[arg(short, long)]
    country: Option<String>,
    /// Google API key with access to the Calendar API.
    #[arg(short = 'k', long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Start of the window (e.g., 2024-01-01, "March 5, 2024", today). Defaults to today.
    #[arg(long)]
    from: Option<String>,
    /// End of the window. Defaults to next January 1st.
    #[arg(long)]
    to: Option<String>,
    /// Print only names and dates.
    #[arg(long, default_value_t = false)]
    minimal: bool,
    /// Print only dates (wins over --minimal).
    #[arg(long, default_value_t = false)]
    dates_only: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutFormat::Json)]
    format: OutFormat,
    /// Override the API root (mainly for testing against a local server).
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_list(args: ListArgs) -> Result<()> {
    let mut query = HolidayQuery::new();
    if let Some(key) = args.api_key {
        query.with_api_key(key);
    }
    if let Some(code) = &args.country {
        query.in_country(code);
    }
    if let Some(from) = &args.from {
        query.from(from)?;
    }
    if let Some(to) = &args.to {
        query.to(to)?;
    }
    if args.minimal {
        query.with_minimal_output();
    }
    if args.dates_only {
        query.with_dates_only();
    }
    if let Some(base) = args.base_url {
        query.with_base_url(base);
    }

    let holidays = query.list()?;
    log::info!("fetched {} holidays", holidays.len());

    let stdout = io::stdout().lock();
    match args.format {
        OutFormat::Json => render::write_json(&holidays, stdout)?,
        OutFormat::Csv => render::write_csv(&holidays, stdout)?,
        OutFormat::Text => render::write_text(&holidays, stdout)?,
    }
    Ok(())
}
