use base_helpers::app::commands;
use base_helpers::utils::{logger, validation::Validate};
use base_helpers::{CliConfig, HelpersConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入配置，未指定時使用預設值
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path.display());
            match HelpersConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => HelpersConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match commands::execute(&cli.command, &config) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("⚠️  {}", warning);
            }
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            if !outcome.passed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
