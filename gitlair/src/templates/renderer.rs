//! Page renderer.

use crate::report::BumpReport;
use crate::templates::TemplateError;
use handlebars::Handlebars;
use serde_json::json;

/// The bump list page.
pub const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");

const INDEX_TEMPLATE_NAME: &str = "index";

/// Creates a configured Handlebars registry.
///
/// HTML escaping stays on, since pull request data ends up in a web page.
/// Strict mode catches template variables the renderer does not provide.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs
}

/// Renders bump reports to HTML.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the index page registered.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RegistrationError`] if the template does not parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders the bump list page for `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_index(&self, owner: &str, report: &BumpReport) -> Result<String, TemplateError> {
        let data = json!({
            "owner": owner,
            "status": report.status().as_str(),
            "bump_count": report.bumps.len(),
            "repositories_checked": report.repositories_checked,
            "bumps": report.bumps,
            "failures": report.failures,
            "skipped": report.skipped,
        });

        Ok(self.handlebars.render(INDEX_TEMPLATE_NAME, &data)?)
    }
}
