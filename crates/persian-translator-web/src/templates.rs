//! Askama templates for the translation page.
//!
//! ## Template Structure
//!
//! - `base.html` - Common RTL layout with CSS
//! - `index.html` - Translation form plus the output panel
//!
//! The same template serves both the empty form (GET) and the filled-in
//! result page (POST): the output slot holds whichever string the outcome
//! mapping produced.

use askama::Template;
use askama_web::WebTemplate;

/// Translation page: form pre-filled with the input, output panel below.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub input_text: String,
    pub output_text: String,
}

impl IndexTemplate {
    /// Empty form for the initial GET.
    pub fn empty() -> Self {
        Self {
            input_text: String::new(),
            output_text: String::new(),
        }
    }
}
