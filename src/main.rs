use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use emoji_vault::application::EmojiImages;
use emoji_vault::domain::EmojiLookup;
use emoji_vault::infrastructure::{AppConfig, CliArgs, Command, EmojiConverter, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, Option<toml::de::Error>)> {
    let storage = StorageManager::new()?;
    let (mut config, parse_error) = storage.load_config_or_default(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, parse_error))
}

async fn lookup(config: &AppConfig, brand: &str, codepoints: &[String]) -> Result<()> {
    let images = EmojiImages::open(config).await?;
    let accessor = images
        .brand(brand)
        .ok_or_else(|| eyre!("brand '{brand}' is not configured"))?;

    for codepoint in codepoints {
        match accessor.lookup(codepoint) {
            Some(base64) => println!("{codepoint}\t{base64}"),
            None => println!("{codepoint}\tabsent"),
        }
    }
    eprintln!("{}", images.stats());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, parse_error) = load_config(&args)?;
    init_logging(&config)?;

    if let Some(e) = parse_error {
        warn!(error = %e, "Failed to parse config file, using defaults");
    }

    info!(version = emoji_vault::VERSION, "Starting {}", emoji_vault::NAME);

    match &args.command {
        Command::Lookup { brand, codepoints } => lookup(&config, brand, codepoints).await,
        Command::Convert { dir, output } => {
            let count = EmojiConverter::convert(dir, output).await?;
            println!("Converted {count} emojis to {}", output.display());
            Ok(())
        }
    }
}
