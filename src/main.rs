use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use gomodsync::commands::check::CheckOptions;
use gomodsync::commands::sync::SyncOptions;
use gomodsync::commands::{self, OutputFormat};
use gomodsync::config::{BuildInfo, fetch_timeout};
use gomodsync::logging;
use gomodsync::reference::ReferenceFetcher;

#[derive(Parser)]
#[command(name = "gomodsync")]
#[command(version, about = "Go module version comparison and sync tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synchronize dependency versions from reference to target
    Sync(SyncArgs),
    /// Check if target versions match reference
    Check(CheckArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct SyncArgs {
    /// Path to the target go.mod file to be modified
    #[arg(short, long)]
    target: PathBuf,
    /// Path or URL to the reference go.mod file with desired versions
    #[arg(short, long)]
    reference: String,
    /// Show changes without modifying the target file
    #[arg(long)]
    dry_run: bool,
    /// Show detailed changes
    #[arg(short, long)]
    verbose: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct CheckArgs {
    /// Path to the target go.mod file to check
    #[arg(short, long)]
    target: PathBuf,
    /// Path or URL to the reference go.mod file with desired versions
    #[arg(short, long)]
    reference: String,
    /// Fail if target has dependencies not in reference
    #[arg(long)]
    strict: bool,
    /// Show detailed version mismatches
    #[arg(short, long)]
    verbose: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not usage errors
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Version => {
            commands::version::run(&BuildInfo::current(), &mut std::io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Sync(args) => {
            logging::init(args.verbose);
            let fetcher = ReferenceFetcher::new(fetch_timeout())?;
            let options = SyncOptions {
                target: args.target,
                reference: args.reference,
                dry_run: args.dry_run,
                verbose: args.verbose,
                format: args.format,
            };

            runtime()?.block_on(commands::sync::run(
                &options,
                &fetcher,
                &mut std::io::stdout().lock(),
            ))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            logging::init(args.verbose);
            let fetcher = ReferenceFetcher::new(fetch_timeout())?;
            let options = CheckOptions {
                target: args.target,
                reference: args.reference,
                strict: args.strict,
                verbose: args.verbose,
                format: args.format,
            };

            let result = runtime()?.block_on(commands::check::run(
                &options,
                &fetcher,
                &mut std::io::stdout().lock(),
            ))?;
            Ok(if result.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
