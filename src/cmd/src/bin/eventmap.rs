use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use cmd::command::markers;
use cmd::command::markers::Markers;
use cmd::command::server;
use cmd::command::submit;
use cmd::command::submit::Submit;
use cmd::config::Config;
use cmd::config::LogLevel;
use cmd::error::Error;
use cmd::error::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Clone)]
pub struct Cfg {
    #[arg(long)]
    config: PathBuf,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Run server
    Server(Cfg),
    /// Print the events of a dataset
    Markers(Markers),
    /// Create an event
    Submit(Submit),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Log level of the client commands
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let Some(command) = &args.command else {
        return Err(Error::BadRequest("no command specified".to_string()));
    };

    let version = env!("CARGO_PKG_VERSION");
    let hash = option_env!("BUILD_HASH").unwrap_or("dev-build");

    match command {
        Commands::Server(cfg) => {
            let cfg: common::config::Config = Config::load(&cfg.config)?.into();
            init_logging(cfg.log.level)?;
            info!("Eventmap v{version}-{hash}");
            server::start(cfg).await?;
        }
        Commands::Markers(cmd_args) => {
            init_logging(args.log_level.into())?;
            markers::show(cmd_args).await?;
        }
        Commands::Submit(cmd_args) => {
            init_logging(args.log_level.into())?;
            submit::run(cmd_args).await?;
        }
    }

    Ok(())
}
