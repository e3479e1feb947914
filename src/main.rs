use clap::Parser;
use modsplit::utils::logger;
use modsplit::{resolve_from, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting modsplit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match resolve_from(&config) {
        Ok(style) => {
            tracing::info!("✅ Resolved split style: {}", style);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&style)?);
            } else {
                println!("{}", style);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Split style resolution failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                modsplit::utils::error::ErrorSeverity::Low => 0,
                modsplit::utils::error::ErrorSeverity::Medium => 2,
                modsplit::utils::error::ErrorSeverity::High => 1,
                modsplit::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
