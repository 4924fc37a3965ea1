//! HTTP route handlers for the Persian translator web application.
//!
//! Both handlers render the full page via Askama. They are infallible:
//! every translation failure has already been folded into a display string
//! by the core outcome mapping, so nothing propagates past this module.

use axum::{
    Router,
    extract::{Form, State},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use persian_translator_core::translate_to_message;

use crate::state::AppState;
use crate::templates::IndexTemplate;

/// Form data for translation.
#[derive(Deserialize, Default)]
pub struct TranslateForm {
    /// Missing field behaves like an empty submission
    #[serde(default)]
    pub input_text: String,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(translate))
        .with_state(state)
}

/// Render the empty translation form.
pub async fn index() -> IndexTemplate {
    IndexTemplate::empty()
}

/// Handle a form submission: translate and re-render the page.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TranslateForm>,
) -> IndexTemplate {
    debug!("Translation submitted: {} bytes of input", form.input_text.len());

    let output_text = translate_to_message(state.translator.as_ref(), &form.input_text).await;

    IndexTemplate {
        input_text: form.input_text,
        output_text,
    }
}
