//! Errors raised while building or rendering the bump page.

/// The bump page could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The report data did not fit the page template, e.g. a field the
    /// template reads is missing under strict mode.
    #[error("Failed to render bump page: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The embedded page template does not parse.
    #[error("Invalid bump page template: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
