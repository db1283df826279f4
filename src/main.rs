use clap::{ArgAction, Parser};
use std::path::PathBuf;

use overmark::Config;

#[derive(Parser, Debug)]
#[command(name = "overmark")]
#[command(version, about = "In-page annotation overlay engine")]
struct Cli {
    /// Load, validate, and print the effective configuration, then exit
    #[arg(long, action = ArgAction::SetTrue)]
    check_config: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.check_config {
        // Print the effective config after defaults and clamping.
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // No flags: the engine is a library; point the user at the API.
    println!("overmark: in-page annotation overlay engine");
    println!();
    println!("Usage:");
    println!("  overmark --check-config            Validate and print the effective config");
    println!("  overmark --config PATH ...         Use an explicit config file");
    println!("  overmark --help                    Show help");
    println!();
    println!("Embedding:");
    println!("  The overlay itself is driven through the library API; see the");
    println!("  overmark::session module documentation.");
    if let Ok(path) = Config::config_path() {
        println!();
        println!("Default config location: {}", path.display());
    }

    Ok(())
}
