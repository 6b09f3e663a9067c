//! Standalone TUI binary for Countryboard.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use cb_client::ClientConfig;
use cb_tui::Source;

#[derive(Parser)]
#[command(
    name = "cb-tui",
    about = "Browse, search, and group countries in the terminal",
    version
)]
struct Args {
    /// GraphQL endpoint to query
    #[arg(long, default_value = cb_client::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Read countries from a saved JSON response instead of the endpoint
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// User-Agent header sent to the endpoint
    #[arg(long)]
    user_agent: Option<String>,

    /// Initial input line, e.g. "search:an group:currency"
    #[arg(long)]
    input: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = cb_tui::logging::init_for_tui(args.verbose, args.log_file.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let source = match args.fixture {
        Some(path) => Source::Fixture(path),
        None => {
            let mut config = ClientConfig::default()
                .with_endpoint(args.endpoint)
                .with_timeout_secs(args.timeout);
            if let Some(user_agent) = args.user_agent {
                config = config.with_user_agent(user_agent);
            }
            Source::Endpoint(config)
        }
    };

    if let Err(e) = cb_tui::launch(source, args.input.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
