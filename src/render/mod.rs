//! HTML rendering for the index page and the results fragment.
//!
//! Templates are embedded at compile time and parsed once at startup, so a
//! broken template stops the process before it serves anything.

pub mod filters;

use minijinja::{context, Environment};

use crate::errors::{AppError, TemplateError};
use crate::models::SearchResult;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const RESULTS_TEMPLATE: &str = "results.html";

const EMBEDDED: &[(&str, &str)] = &[
    (INDEX_TEMPLATE, include_str!("../../templates/index.html")),
    (RESULTS_TEMPLATE, include_str!("../../templates/results.html")),
];

/// Parsed template set with the presentation filters registered.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse the embedded templates.
    pub fn load() -> Result<Self, TemplateError> {
        Self::from_sources(EMBEDDED)
    }

    /// Parse `(name, source)` pairs. Both the page and fragment names must be
    /// present for rendering to succeed.
    pub fn from_sources(sources: &[(&'static str, &'static str)]) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        env.add_filter("time_ago", filters::time_ago_filter);
        env.add_filter("format_num", filters::format_num_filter);
        env.add_filter("lang_color", filters::lang_color_filter);

        for &(name, source) in sources {
            env.add_template(name, source)
                .map_err(|source| TemplateError { name, source })?;
        }
        Ok(Self { env })
    }

    /// Full page: language picker plus the initial results.
    pub fn render_index(
        &self,
        languages: &[String],
        results: &SearchResult,
    ) -> Result<String, AppError> {
        self.render(INDEX_TEMPLATE, context! { languages, results })
    }

    /// Results fragment swapped into the page on every search.
    pub fn render_results(&self, results: &SearchResult) -> Result<String, AppError> {
        self.render(RESULTS_TEMPLATE, context! { results })
    }

    fn render(&self, template: &'static str, ctx: minijinja::Value) -> Result<String, AppError> {
        self.env
            .get_template(template)
            .and_then(|t| t.render(ctx))
            .map_err(|source| AppError::Render { template, source })
    }
}
