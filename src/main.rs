use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fashionmate::config::Settings;
use fashionmate::llm::RecommendationClient;
use fashionmate::orchestrator::{self, OneShot};
use fashionmate::state::SessionController;

#[derive(Parser, Debug)]
#[command(
    name = "fashionmate",
    about = "AI personal stylist: curate your look for any occasion",
    version
)]
struct Cli {
    /// Occasion to dress for; runs a single request instead of the interactive form
    #[arg(long)]
    occasion: Option<String>,

    /// Style archetype: Female, Male or Non-Binary
    #[arg(long)]
    style: Option<String>,

    /// Optional refinements, e.g. "no heels, love linen"
    #[arg(long, default_value = "")]
    preferences: String,

    /// Print the recommendation as JSON (single request only)
    #[arg(long)]
    json: bool,

    /// TOML file holding GEMINI_API_KEY
    #[arg(long)]
    secrets: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("fatal: {err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let settings = Settings::load(cli.secrets.as_deref())?;
    let client = RecommendationClient::from_api_key(settings.api_key.as_deref());
    tracing::info!(offline = client.is_offline(), "stylist ready");
    let mut controller = SessionController::new(client);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.occasion {
        Some(occasion) => {
            let request = OneShot {
                occasion,
                style: cli.style,
                preferences: cli.preferences,
                json: cli.json,
            };
            orchestrator::run_once(&mut controller, &request, &mut out)
        }
        None => {
            orchestrator::run_interactive(&mut controller, io::stdin().lock(), &mut out)?;
            Ok(orchestrator::EXIT_OK)
        }
    }
}
