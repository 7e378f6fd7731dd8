mod commands;

use clap::{Parser, Subcommand};
use commands::TargetArgs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "hoist",
    about = "Build a container image, push it to ECR, and roll it out to AWS Lambda"
)]
#[command(version)]
struct Cli {
    /// Path to the config file (default: ./hoist.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, push, and point the Lambda function at the new image (default)
    Deploy {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Write a starter hoist.toml
    Init,
    /// Print the registry URI and image reference
    Refs {
        /// Use this account ID instead of asking AWS STS
        #[arg(long)]
        account_id: Option<String>,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Show the Lambda function's state and current image
    Status {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(commands::exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        None => commands::deploy(config, &TargetArgs::default()).await?,
        Some(Commands::Deploy { target }) => commands::deploy(config, &target).await?,
        Some(Commands::Init) => commands::init(config)?,
        Some(Commands::Refs { account_id, target }) => {
            commands::refs(config, account_id.as_deref(), &target).await?
        }
        Some(Commands::Status { target }) => commands::status(config, &target).await?,
    }

    Ok(())
}
