use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use shardpath_uuid::{convert, ShardError, ShardPath};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "uuid-to-path")]
#[command(about = "Convert a UUID into its two-level shard directory")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// UUID, hyphenated or as 32 hex digits
    #[arg(allow_hyphen_values = true)]
    uuid: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Wrong number of arguments; carries the rendered usage line.
    #[error("{0}")]
    Usage(String),
    #[error("{}", .0.user_message())]
    InvalidUuid(#[from] ShardError),
}

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args_os()) {
        Ok(shard) => {
            println!("File path: {shard}");
            ExitCode::SUCCESS
        }
        Err(err @ CliError::Usage(_)) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err @ CliError::InvalidUuid(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr and are silent unless `RUST_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn usage() -> CliError {
    CliError::Usage(Cli::command().render_usage().to_string())
}

/// Expects the program name followed by exactly one argument, counted as given on the
/// command line (a `--` token is an argument like any other).
fn run<I, T>(args: I) -> Result<ShardPath, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        tracing::debug!(count = args.len().saturating_sub(1), "wrong argument count");
        return Err(usage());
    }
    // Escape the single value so clap never reads it as an option or end-of-options marker
    args.insert(1, OsString::from("--"));

    let cli = Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::InvalidUtf8 => {
            CliError::InvalidUuid(ShardError::Parse("argument is not valid UTF-8".into()))
        }
        kind => {
            tracing::debug!(?kind, "argument error");
            usage()
        }
    })?;
    tracing::debug!(input = %cli.uuid, "converting");

    Ok(convert(&cli.uuid)?)
}
