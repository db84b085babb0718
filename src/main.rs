//! agri-ai - Agriculture Assistant for the Philippines
//!
//! ## Usage
//!
//! ### Console Mode
//! ```bash
//! agri-ai advise --crop Rice --location "Central Luzon" --climate "Wet season" \
//!     --soil Clay --concern "Water Management"
//! agri-ai ask "How do I grow rice?"
//! agri-ai demo
//! ```
//!
//! ### HTTP Server Mode
//! ```bash
//! agri-ai serve --port 5000
//! ```
//!
//! AI mode is enabled with `--use-ai` (or `USE_AI_MODEL=true`) plus an API key.

use agri_ai::knowledge::{CLIMATE_OPTIONS, CONCERN_OPTIONS, CROP_OPTIONS, SOIL_OPTIONS};
use agri_ai::{server, AdvisorConfig, AgriAssistant, FarmingContext, LlmConfig};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::convert::Infallible;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Agri-AI - Agriculture Assistant for the Philippines
#[derive(Parser)]
#[command(name = "agri-ai")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(flatten)]
    ai: AiArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Upstream model settings, read once at startup
#[derive(Args)]
struct AiArgs {
    /// Ask the upstream LLM first, falling back to local advice
    /// (env: true/1/yes/on in any case; anything else is off)
    #[arg(long, global = true, env = "USE_AI_MODEL", value_parser = parse_toggle)]
    use_ai: bool,

    /// LLM API base URL (OpenAI-compatible)
    #[arg(
        long,
        global = true,
        env = "AGRI_LLM_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    llm_base_url: String,

    /// LLM API key
    #[arg(long, global = true, env = "AGRI_LLM_API_KEY", hide_env_values = true)]
    llm_key: Option<String>,

    /// LLM model name
    #[arg(long, global = true, env = "AGRI_LLM_MODEL", default_value = "gpt-4o-mini")]
    llm_model: String,

    /// LLM request timeout in seconds
    #[arg(long, global = true, env = "AGRI_LLM_TIMEOUT_SECS", default_value_t = agri_ai::config::DEFAULT_TIMEOUT_SECS)]
    llm_timeout: u64,
}

/// Lenient on/off reading of a toggle value. Never fails.
fn parse_toggle(value: &str) -> std::result::Result<bool, Infallible> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}

impl AiArgs {
    fn into_config(self) -> AdvisorConfig {
        let llm = self.llm_key.map(|key| {
            LlmConfig::new(self.llm_base_url, key, self.llm_model)
                .with_timeout(Duration::from_secs(self.llm_timeout))
        });

        AdvisorConfig {
            use_ai_model: self.use_ai,
            llm,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get advice for a farming context (prompts for missing fields)
    Advise {
        /// Crop (e.g., Rice, Corn, Banana)
        #[arg(long)]
        crop: Option<String>,

        /// Location (e.g., Central Luzon, Mindanao)
        #[arg(long)]
        location: Option<String>,

        /// Current climate (e.g., Wet season, Dry season, Monsoon)
        #[arg(long)]
        climate: Option<String>,

        /// Soil type (e.g., Clay, Sandy loam)
        #[arg(long)]
        soil: Option<String>,

        /// Main concern (e.g., Water Management, Pest Control)
        #[arg(long)]
        concern: Option<String>,
    },

    /// Ask a free-text farming question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Run the demonstration scenarios
    Demo {
        /// Do not wait for Enter between scenarios
        #[arg(long)]
        no_pause: bool,
    },

    /// Run as HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .init();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!(error = %e, "No .env loaded"),
    }

    let assistant =
        AgriAssistant::new(cli.ai.into_config()).context("Invalid AI model configuration")?;
    info!(mode = assistant.mode(), "Assistant ready");

    match cli.command {
        Commands::Advise {
            crop,
            location,
            climate,
            soil,
            concern,
        } => run_advise(&assistant, crop, location, climate, soil, concern).await,
        Commands::Ask { prompt } => {
            let answer = assistant.ask(&prompt.join(" ")).await;
            println!("{}", answer);
            Ok(())
        }
        Commands::Demo { no_pause } => run_demo(&assistant, no_pause).await,
        Commands::Serve { port, host } => {
            server::serve(&host, port, assistant)
                .await
                .context("Server error")?;
            Ok(())
        }
    }
}

// ============================================================================
// Console
// ============================================================================

async fn run_advise(
    assistant: &AgriAssistant,
    crop: Option<String>,
    location: Option<String>,
    climate: Option<String>,
    soil: Option<String>,
    concern: Option<String>,
) -> Result<()> {
    println!("🌾 Welcome to Agri-AI - Your Agriculture Assistant for the Philippines! 🌾");
    println!("{}", "=".repeat(60));

    let interactive = [&crop, &location, &climate, &soil, &concern]
        .iter()
        .any(|f| f.is_none());
    if interactive {
        println!("\nPlease provide your farming details:");
    }

    let context = {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        let crop = field_or_ask(&mut input, crop, "1. Crop Type", Some(CROP_OPTIONS), "Enter your crop")?;
        let location = field_or_ask(
            &mut input,
            location,
            "2. Location (e.g., Central Luzon, Mindanao, Visayas)",
            None,
            "Enter your location",
        )?;
        let climate =
            field_or_ask(&mut input, climate, "3. Climate", Some(CLIMATE_OPTIONS), "Enter current climate")?;
        let soil = field_or_ask(&mut input, soil, "4. Soil Type", Some(SOIL_OPTIONS), "Enter soil type")?;
        let concern = field_or_ask(
            &mut input,
            concern,
            "5. Main Concern",
            Some(CONCERN_OPTIONS),
            "Enter your main concern",
        )?;

        FarmingContext::new(crop, location, climate, soil, concern)
    };

    let response = assistant.get_advice(context).await;

    println!("\n📋 RECOMMENDATIONS:");
    println!("{}", "=".repeat(40));
    println!("{}", response);

    Ok(())
}

/// Use the flag value if given, otherwise ask on the console
fn field_or_ask(
    input: &mut impl BufRead,
    value: Option<String>,
    heading: &str,
    options: Option<&[&str]>,
    prompt: &str,
) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    match options {
        Some(options) => println!("\n{}: {}", heading, options.join(", ")),
        None => println!("\n{}", heading),
    }
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

async fn run_demo(assistant: &AgriAssistant, no_pause: bool) -> Result<()> {
    let scenarios = [
        (
            "Rice Farming - Water Management",
            FarmingContext::new("Rice", "Central Luzon", "Wet season", "Clay", "Water Management"),
        ),
        (
            "Corn Farming - Pest Control",
            FarmingContext::new("Corn", "Mindanao", "Dry season", "Sandy loam", "Pest Control"),
        ),
        (
            "Banana Farming - Soil Health",
            FarmingContext::new("Banana", "Southern Luzon", "Monsoon", "Sandy", "Soil Health"),
        ),
    ];

    println!("🌾 AGRI-AI DEMONSTRATION");
    println!("{}", "=".repeat(50));

    let total = scenarios.len();
    for (i, (title, context)) in scenarios.into_iter().enumerate() {
        println!("\n📋 DEMO {}: {}", i + 1, title);
        println!("{}", "-".repeat(40));

        let advice = assistant.get_advice(context).await;
        println!("{}", advice);
        println!("\n{}", "=".repeat(50));

        if !no_pause && i + 1 < total {
            print!("Press Enter to continue to next demo...");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_advise_flags() {
        let cli = Cli::try_parse_from([
            "agri-ai", "advise", "--crop", "Rice", "--concern", "Water Management",
        ])
        .unwrap();
        match cli.command {
            Commands::Advise { crop, concern, soil, .. } => {
                assert_eq!(crop.as_deref(), Some("Rice"));
                assert_eq!(concern.as_deref(), Some("Water Management"));
                assert!(soil.is_none());
            }
            _ => panic!("expected advise"),
        }
    }

    #[test]
    fn test_ai_args_build_config() {
        let cli = Cli::try_parse_from([
            "agri-ai", "--use-ai", "--llm-key", "sk-test", "--llm-timeout", "5", "ask", "hello",
        ])
        .unwrap();
        let config = cli.ai.into_config();
        assert!(config.remote_enabled());
        let llm = config.llm.unwrap();
        assert_eq!(llm.timeout, Duration::from_secs(5));
        assert_eq!(llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_parse_toggle() {
        for on in ["true", "TRUE", "True", "1", "yes", " on "] {
            assert_eq!(parse_toggle(on), Ok(true), "{on}");
        }
        for off in ["false", "FALSE", "0", "no", "", "maybe"] {
            assert_eq!(parse_toggle(off), Ok(false), "{off}");
        }
    }

    #[test]
    fn test_use_ai_env_is_lenient() {
        let cases = [("TRUE", true), ("1", true), ("True", true), ("false", false), ("maybe", false)];
        for (value, expected) in cases {
            std::env::set_var("USE_AI_MODEL", value);
            let parsed = Cli::try_parse_from(["agri-ai", "ask", "hi"]);
            std::env::remove_var("USE_AI_MODEL");

            let cli = parsed.unwrap_or_else(|e| panic!("USE_AI_MODEL={value}: {e}"));
            assert_eq!(cli.ai.use_ai, expected, "USE_AI_MODEL={value}");
        }
    }

    #[test]
    fn test_field_or_ask_reads_console() {
        let mut input = io::Cursor::new("  Corn \n");
        let value = field_or_ask(&mut input, None, "1. Crop Type", Some(CROP_OPTIONS), "Enter your crop").unwrap();
        assert_eq!(value, "Corn");

        let mut untouched = io::Cursor::new("");
        let value = field_or_ask(&mut untouched, Some("Rice".to_string()), "", None, "").unwrap();
        assert_eq!(value, "Rice");
    }
}
