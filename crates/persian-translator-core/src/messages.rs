//! User-facing Persian messages and the outcome mapping.
//!
//! Every request produces exactly one of three string variants: the
//! translation itself, the empty-input apology, or an error message. All
//! three share one representation and one display slot, so nothing past
//! this module needs to distinguish them.

use tracing::error;

use crate::error::Error;
use crate::translator::Translator;

/// Shown when the form is submitted with no text.
pub const EMPTY_INPUT_MESSAGE: &str = "لطفاً متنی برای ترجمه وارد کنید.";

/// Error message embedding the upstream HTTP status code.
pub fn status_error_message(status: u16) -> String {
    format!("خطا: ترجمه با مشکل مواجه شد. کد خطا: {status}")
}

/// Generic error message embedding the failure detail.
pub fn failure_message(detail: &impl std::fmt::Display) -> String {
    format!("خطایی رخ داده است: {detail}")
}

/// Translate `input` and fold every outcome into a display string.
///
/// Empty input short-circuits to the apology without calling the API.
/// Errors are logged here and never propagate to the caller.
pub async fn translate_to_message(translator: &dyn Translator, input: &str) -> String {
    if input.is_empty() {
        return EMPTY_INPUT_MESSAGE.to_string();
    }

    match translator.translate(input).await {
        Ok(translated) => translated,
        Err(Error::ApiStatus { status, .. }) => {
            error!("Translation failed with HTTP {}", status);
            status_error_message(status)
        }
        Err(e) => {
            error!("Translation failed: {}", e);
            failure_message(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_contains_code() {
        let msg = status_error_message(503);
        assert!(msg.contains("503"));
    }

    #[test]
    fn test_failure_message_contains_detail() {
        let err = Error::Request("connection refused".to_string());
        let msg = failure_message(&err);
        assert!(msg.contains("connection refused"));
    }
}
