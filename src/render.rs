//! Printable HTML rendering of laid-out report cards.

use chrono::Local;
use common::{ReportDocument, ReportPage, ReportRecord};
use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

const REPORT_TEMPLATE_NAME: &str = "report_card";
const REPORT_TEMPLATE: &str = include_str!("../templates/report_card.html.hbs");

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid report template: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("failed to render report document: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    app_name: &'a str,
    generated_on: String,
    pages: &'a [ReportPage],
}

pub struct DocumentRenderer {
    templates: Handlebars<'static>,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self, DocumentError> {
        let mut templates = Handlebars::new();
        templates.register_template_string(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;
        trace!("Registered template '{}'", REPORT_TEMPLATE_NAME);
        Ok(Self { templates })
    }

    /// Render every page of `document` into one HTML file. Each page after
    /// the first starts on a new printed sheet.
    pub fn render(&self, app_name: &str, document: &ReportDocument) -> Result<String, DocumentError> {
        let context = DocumentContext {
            app_name,
            generated_on: Local::now().format("%-m/%-d/%Y").to_string(),
            pages: &document.pages,
        };
        let html = self.templates.render(REPORT_TEMPLATE_NAME, &context)?;
        debug!("Rendered {} page(s), {} bytes", document.pages.len(), html.len());
        Ok(html)
    }
}

/// Lay out `records` and render them in one go, one page per record.
pub fn render_records(app_name: &str, records: &[ReportRecord]) -> Result<String, DocumentError> {
    let document = ReportDocument::layout(records);
    DocumentRenderer::new()?.render(app_name, &document)
}
