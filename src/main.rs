use anyhow::Context;
use clap::Parser;
use flagkit::utils::error::ErrorSeverity;
use flagkit::utils::{logger, validation::Validate};
use flagkit::{CliConfig, FlagKitConfig, FlagKitError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match FlagKitConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => FlagKitConfig::default(),
    };

    logger::init_cli_logger(cli.verbose, &config.logging.level, config.logging.format);

    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = config.validate() {
        report(&e, "Configuration validation failed");
        std::process::exit(e.exit_code());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = flagkit::app::execute(&cli.command, &config, &mut out) {
        report(&e, "Command failed");
        std::process::exit(e.exit_code());
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn report(e: &FlagKitError, context: &str) {
    match e.severity() {
        ErrorSeverity::Low => tracing::warn!("{}: {}", context, e),
        severity => tracing::error!("{}: {} (severity: {:?})", context, e, severity),
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
