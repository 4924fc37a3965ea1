//! Persian Translator Core Library
//!
//! This library provides the core functionality for translating text into
//! Persian:
//! - Translation via OpenAI-compatible chat-completions APIs (OpenRouter)
//! - Mapping of every translation outcome to a single user-facing string
//! - Configuration loading
//!
//! The web and CLI front ends are thin wrappers over this crate.

pub mod config;
pub mod error;
pub mod messages;
pub mod translator;

pub use config::{AppConfig, TranslatorConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use messages::{translate_to_message, EMPTY_INPUT_MESSAGE};
pub use translator::{create_translator, OpenRouterTranslator, Translator, TranslatorInfo};
