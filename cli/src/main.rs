mod endpoint;
mod files;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use requirements::config::{
    CONNECT_TIMEOUT_ENV, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, ENDPOINT_URL_ENV,
    REQUEST_TIMEOUT_ENV, Timeouts,
};
use requirements::error::{EndpointError, SearchError, SubmitError};
use requirements::submit::run_submission;
use requirements::track::run_search;
use requirements::wire::{DEPARTMENT_OPTIONS, PRIORITY_OPTIONS};
use requirements::{AttachmentCollector, EndpointConfig, StatusFilter, SubmissionForm, SubmitState, TrackState};
use tracing::Level;

use crate::endpoint::HttpEndpoint;
use crate::files::{HtmlDescription, PathFile};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Endpoint(#[from] EndpointError),
    #[error("{}", .0.user_message())]
    Submit(#[from] SubmitError),
    #[error("{}", .0.user_message())]
    Search(#[from] SearchError),
    #[error("cannot read {path}: {reason}")]
    Input { path: String, reason: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "reqdesk", about = "Submit and track requirements against the requirements endpoint")]
struct Cli {
    #[arg(long, env = ENDPOINT_URL_ENV)]
    endpoint: String,

    #[arg(long, env = REQUEST_TIMEOUT_ENV, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, env = CONNECT_TIMEOUT_ENV, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a new requirement.
    Submit(SubmitArgs),
    /// List requirements filed under an email address.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, value_parser = PossibleValuesParser::new(DEPARTMENT_OPTIONS))]
    department: String,

    #[arg(long, value_parser = PossibleValuesParser::new(PRIORITY_OPTIONS))]
    priority: String,

    #[arg(long)]
    title: String,

    /// Description as HTML.
    #[arg(long, conflicts_with = "description_file", required_unless_present = "description_file")]
    description: Option<String>,

    /// Read the HTML description from a file.
    #[arg(long)]
    description_file: Option<PathBuf>,

    /// Attach a file (repeatable). Files over 10 MiB are skipped.
    #[arg(long = "attach")]
    attachments: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(long)]
    email: String,

    /// `all`, or an exact status such as `Done`.
    #[arg(long, default_value = "all")]
    status: String,

    /// Print the matching records as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = EndpointConfig::new(&cli.endpoint)?.with_timeouts(Timeouts {
        request_secs: cli.timeout_secs,
        connect_secs: cli.connect_timeout_secs,
    });
    let endpoint = HttpEndpoint::new(&config)?;

    match cli.command {
        Command::Submit(args) => run_submit(&endpoint, args).await,
        Command::Search(args) => run_track(&endpoint, args).await,
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

async fn run_submit(endpoint: &HttpEndpoint, args: SubmitArgs) -> Result<(), CliError> {
    let html = match (args.description, args.description_file) {
        (Some(html), _) => html,
        (None, Some(path)) => tokio::fs::read_to_string(&path).await.map_err(|e| CliError::Input {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?,
        (None, None) => String::new(),
    };
    let surface = HtmlDescription::new(html);

    let mut files = Vec::with_capacity(args.attachments.len());
    for path in &args.attachments {
        let file = PathFile::open(path).map_err(|e| CliError::Input {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        files.push(file);
    }
    let mut attachments = AttachmentCollector::new();
    for rejection in attachments.select(files) {
        eprintln!("{}", rejection.alert_message());
    }

    let mut form = SubmissionForm {
        member_name: args.name,
        member_email: args.email,
        department: args.department,
        priority: args.priority,
        title: args.title,
    };
    let mut state = SubmitState::default();
    let message = run_submission(&mut state, endpoint, &mut form, &surface, &mut attachments).await?;
    println!("{}", message.unwrap_or_else(|| "submitted".to_owned()));
    Ok(())
}

async fn run_track(endpoint: &HttpEndpoint, args: SearchArgs) -> Result<(), CliError> {
    let mut state = TrackState::default();
    let found = run_search(&mut state, endpoint, &args.email).await?;
    if found == 0 {
        println!("No requirements found for this email address.");
        return Ok(());
    }

    state.set_filter(StatusFilter::parse(&args.status));
    if args.json {
        let records = state.results.filter(&state.filter);
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let cards = state.visible_cards();
    println!("{} of {found} requirement(s)", cards.len());
    for card in cards {
        println!();
        print!("{}", card.to_plain_text());
    }
    Ok(())
}
