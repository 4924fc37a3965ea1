//! Persian Translator CLI - Command line tool for translating text into Persian.

use anyhow::{Context, Result};
use clap::Parser;
use persian_translator_core::{AppConfig, Error, TranslatorConfig, create_translator};
use std::io::Read;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "persian-translate")]
#[command(author, version, about = "Translate text into Persian", long_about = None)]
struct Args {
    /// Text to translate (reads stdin when omitted)
    text: Option<String>,

    /// API base URL for the OpenAI-compatible endpoint
    /// [default: https://openrouter.ai/api/v1]
    #[arg(long, env = "OPENROUTER_API_BASE")]
    api_base: Option<String>,

    /// API key for the DeepSeek model on OpenRouter
    #[arg(long, env = "DEEPSEEK_API_KEY")]
    api_key: Option<String>,

    /// Model name for the OpenAI-compatible API
    /// [default: deepseek/deepseek-chat:free]
    #[arg(long, env = "TRANSLATOR_MODEL")]
    model: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Layer CLI/env overrides on top of the file config.
///
/// Fields the user did not supply keep their file (or default) values, so
/// an `api_key` from `--config file.toml` survives when the flag is absent.
fn resolve_translator(args: &Args, config: AppConfig) -> TranslatorConfig {
    let mut translator = config.translator;

    if let Some(api_base) = &args.api_base {
        translator.api_base = api_base.clone();
    }
    if let Some(model) = &args.model {
        translator.model = model.clone();
    }
    if let Some(api_key) = &args.api_key {
        translator.api_key = Some(api_key.clone());
    }

    translator
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer.trim_end_matches('\n').to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load or create config
    let config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::default()
    };

    let translator_config = resolve_translator(&args, config);

    if translator_config.api_key.is_none() {
        return Err(Error::MissingApiKey).context("Set DEEPSEEK_API_KEY or pass --api-key");
    }

    let input = read_input(&args)?;
    if input.is_empty() {
        anyhow::bail!("No text to translate");
    }

    info!("Translating {} bytes of input", input.len());

    let translator =
        create_translator(&translator_config).context("Failed to initialize translator")?;

    let translated = translator
        .translate(&input)
        .await
        .context("Translation failed")?;

    #[allow(clippy::print_stdout)]
    {
        println!("{translated}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use persian_translator_core::{DEFAULT_API_BASE, DEFAULT_MODEL};

    fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("args should parse")
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).expect("failed to write config file");
        path
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let args = parse_args(&["persian-translate", "hello"]);
        let translator = resolve_translator(&args, AppConfig::default());

        assert_eq!(translator.api_base, DEFAULT_API_BASE);
        assert_eq!(translator.model, DEFAULT_MODEL);
        assert!(translator.api_key.is_none());
    }

    #[test]
    fn test_config_file_api_key_survives_without_flag() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_config(
            &dir,
            r#"
            [translator]
            api_key = "sk-from-file"
            model = "file-model"
            "#,
        );

        let config = AppConfig::from_file(&path).expect("config file should load");
        let args = parse_args(&["persian-translate", "hello"]);
        let translator = resolve_translator(&args, config);

        assert_eq!(translator.api_key.as_deref(), Some("sk-from-file"));
        assert_eq!(translator.model, "file-model");
        assert_eq!(translator.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = write_config(
            &dir,
            r#"
            [translator]
            api_key = "sk-from-file"
            api_base = "http://file.example/v1"
            model = "file-model"
            "#,
        );

        let config = AppConfig::from_file(&path).expect("config file should load");
        let args = parse_args(&[
            "persian-translate",
            "hello",
            "--api-key",
            "sk-from-flag",
            "--model",
            "flag-model",
        ]);
        let translator = resolve_translator(&args, config);

        // Supplied flags win, everything else keeps the file values
        assert_eq!(translator.api_key.as_deref(), Some("sk-from-flag"));
        assert_eq!(translator.model, "flag-model");
        assert_eq!(translator.api_base, "http://file.example/v1");
    }
}
