mod aws;
mod script;
mod serialize;
mod token;
mod value;

/// Version injected at compile time via LAWS_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("LAWS_VERSION") {
    Some(v) => v,
    None => "dev",
};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use tokio::runtime::Runtime;
use tracing::Level;

use aws::http::ClientConfig;
use aws::provider::AwsProvider;
use script::ScriptHost;
use token::TokenProvider;

/// Run Lua scripts against AWS identity and network resources
#[derive(Parser, Debug)]
#[command(name = "laws", version = VERSION, about, long_about = None)]
struct Args {
    /// Lua script to run
    #[arg(short, long)]
    filename: PathBuf,

    /// AWS access key id
    #[arg(long)]
    aws_access_key: String,

    /// AWS secret access key
    #[arg(long)]
    aws_secret_key: String,

    /// AWS region
    #[arg(long)]
    aws_region: String,

    /// Secret for the token module
    #[arg(long, default_value = "secret")]
    token_secret: String,

    /// Endpoint override for all AWS services (LocalStack)
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    // Logs go to stderr; stdout belongs to the script.
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!("laws {} started with log level: {:?}", VERSION, level);
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    ensure!(
        args.filename.is_file(),
        "script {} does not exist",
        args.filename.display()
    );

    let config = ClientConfig {
        access_key: args.aws_access_key,
        secret_key: args.aws_secret_key,
        region: args.aws_region,
        endpoint_url: args.endpoint_url,
    };
    tracing::info!("client configuration: {:?}", config);

    // The script itself is synchronous; the runtime only drives the cloud
    // calls it makes.
    let runtime = Runtime::new()?;
    let provider = Arc::new(AwsProvider::new(&config));
    let tokens = Arc::new(TokenProvider::new(args.token_secret));

    let host = ScriptHost::new(provider, tokens, runtime.handle().clone())?;
    host.run_file(&args.filename)
}
