//! CLI frontend for Countryboard.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cb",
    about = "Countryboard: search and group the world's countries",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where countries come from.
#[derive(Args)]
struct SourceArgs {
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
}

#[derive(Subcommand)]
enum Commands {
    /// Print countries as grouped tables
    List {
        /// Input line, e.g. "search:an group:currency"
        #[arg(short, long, default_value = "")]
        input: String,

        /// Click the row of this country (repeatable, applied in order)
        #[arg(short, long)]
        click: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print fetched countries as JSON
    Fetch {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the field names accepted by group:
    Fields,

    /// Launch the interactive terminal browser
    Tui {
        /// Initial input line
        #[arg(short, long)]
        input: Option<String>,

        /// Write logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Tui { .. }) {
        cb_tui::logging::init_stderr(cli.verbose);
    }

    let result = match cli.command {
        Commands::List {
            input,
            click,
            source,
        } => commands::list::run(source.into(), &input, &click),
        Commands::Fetch { source } => commands::fetch::run(source.into()),
        Commands::Fields => commands::fields::run(),
        Commands::Tui {
            input,
            log_file,
            source,
        } => commands::tui::run(source.into(), input.as_deref(), log_file.as_deref(), cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<SourceArgs> for cb_tui::Source {
    fn from(args: SourceArgs) -> Self {
        if let Some(path) = args.fixture {
            return cb_tui::Source::Fixture(path);
        }
        let mut config = cb_client::ClientConfig::default()
            .with_endpoint(args.endpoint)
            .with_timeout_secs(args.timeout);
        if let Some(user_agent) = args.user_agent {
            config = config.with_user_agent(user_agent);
        }
        cb_tui::Source::Endpoint(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of(args: &[&str]) -> cb_tui::Source {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::List { source, .. } => source.into(),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn source_args_build_endpoint_config() {
        let cb_tui::Source::Endpoint(config) = source_of(&[
            "cb",
            "list",
            "--endpoint",
            "http://localhost:4000/",
            "--timeout",
            "5",
            "--user-agent",
            "atlas/1.0",
        ]) else {
            panic!("expected endpoint");
        };
        assert_eq!(config.endpoint, "http://localhost:4000/");
        assert_eq!(config.timeout.as_secs(), 5);
        assert_eq!(config.user_agent, "atlas/1.0");
    }

    #[test]
    fn fixture_overrides_endpoint() {
        assert_eq!(
            source_of(&["cb", "list", "--fixture", "countries.json"]),
            cb_tui::Source::Fixture(PathBuf::from("countries.json"))
        );
    }
}
