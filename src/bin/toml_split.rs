use anyhow::Context;
use clap::Parser;
use modsplit::config::toml_config::TomlConfig;
use modsplit::resolve_from;
use modsplit::utils::{logger, validation::Validate};

#[derive(Parser)]
#[command(name = "toml-split")]
#[command(about = "Resolve a module splitting policy from a TOML build configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "modsplit.toml")]
    config: String,

    /// Override the split style from the config file
    #[arg(long)]
    split_style: Option<String>,

    /// Override the split packages from the config file
    #[arg(long = "split-package", value_delimiter = ',')]
    split_packages: Vec<String>,

    /// Print the resolved policy as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(style) = args.split_style {
        tracing::info!("🔧 Split style overridden to: {}", style);
        config.splitting.get_or_insert_with(Default::default).style = Some(style);
    }

    if !args.split_packages.is_empty() {
        tracing::info!("🔧 Split packages overridden to: {:?}", args.split_packages);
        config.splitting.get_or_insert_with(Default::default).packages =
            Some(args.split_packages);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let style = resolve_from(&config)?;

    tracing::info!("✅ Resolved split style for '{}': {}", config.project.name, style);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&style)?);
    } else {
        println!("{}", style);
    }

    Ok(())
}
