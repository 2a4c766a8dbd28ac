use std::{env, process};

use anyhow::anyhow;
use clap::Parser;
use mevreg::cli::{
    Cli, Commands,
    register::RegisterConfig,
    sign::{SignConfig, sign_new_registration},
    verify::VerifyConfig,
};
use mevreg_builder::builder_client::BuilderClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Entry point for mevreg. Initializes logging, parses CLI arguments and runs the selected
/// subcommand. Any failure is logged, reported as `FAIL` and exits with status 1.
fn main() {
    let cli = Cli::parse();

    // Set the default log level based on verbosity flag or RUST_LOG env var
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(cli.log_directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Register(config) => run_register(*config),
        Commands::Sign(config) => run_sign(*config),
        Commands::Verify(config) => run_verify(config),
    };

    if let Err(err) = result {
        error!("{err:#}");
        println!("FAIL");
        process::exit(1);
    }
}

/// Signs a registration under a freshly generated key and posts it to the relay.
pub fn run_register(config: RegisterConfig) -> anyhow::Result<()> {
    let signed_registration = sign_new_registration(&config.registration)?;

    if config.dry_run {
        info!("Dry run, registration is not submitted");
        println!("{}", serde_json::to_string_pretty(&signed_registration)?);
        return Ok(());
    }

    let builder_client = BuilderClient::new(config.builder_config())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| anyhow!("Failed to build tokio runtime: {err}"))?;
    let response = runtime.block_on(builder_client.register_validator(&signed_registration))?;

    info!("Relay accepted validator registration");
    println!("SUCCESS");
    println!("RESPONSE={response}");
    Ok(())
}

pub fn run_sign(config: SignConfig) -> anyhow::Result<()> {
    let signed_registration = sign_new_registration(&config.registration)?;
    println!("{}", config.format.render(&signed_registration)?);
    Ok(())
}

pub fn run_verify(config: VerifyConfig) -> anyhow::Result<()> {
    config.verify()?;
    println!("VALID");
    Ok(())
}
