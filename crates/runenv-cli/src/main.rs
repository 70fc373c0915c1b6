mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "runenv",
    about = "Deploy to Cloud Run with variables from a .env file"
)]
#[command(version)]
struct Cli {
    /// Env file to load (default: [deploy].env_file in runenv.toml, else .env)
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the source directory to Google Cloud Run
    Deploy {
        /// Print the gcloud command instead of running it
        #[arg(long)]
        dry_run: bool,
        /// Source directory passed to --source
        #[arg(long, value_name = "DIR")]
        source: Option<String>,
        /// Container port passed to --port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show Cloud Run service status
    Status,
    /// List Cloud Run services in the project and region
    List,
    /// Read recent Cloud Run logs
    Logs {
        /// Number of log entries to show (default: [logs].limit, else 100)
        #[arg(long, short = 'n')]
        limit: Option<u32>,
    },
    /// Delete the Cloud Run service
    Destroy {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Check gcloud setup and deploy variables
    Doctor,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to info level"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            commands::exit_code(&e)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let env_file = cli.env_file.as_deref();

    match cli.command {
        Commands::Deploy {
            dry_run,
            source,
            port,
        } => {
            commands::deploy(
                env_file,
                commands::DeployOptions {
                    dry_run,
                    source,
                    port,
                },
            )
            .await?
        }
        Commands::Status => commands::status(env_file).await?,
        Commands::List => commands::list(env_file).await?,
        Commands::Logs { limit } => commands::logs(env_file, limit).await?,
        Commands::Destroy { yes } => commands::destroy(env_file, yes).await?,
        Commands::Doctor => commands::doctor(env_file).await?,
    }

    Ok(())
}
