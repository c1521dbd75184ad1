use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::error::Result;
use crate::report::backend::{RenderBackend, WkhtmltopdfBackend};
use crate::report::markup::translate;
use crate::report::options::{RenderOptions, ReportStyle};
use crate::report::template::ReportTemplate;

pub struct ReportRenderer {
    backend: Arc<dyn RenderBackend>,
    template: ReportTemplate,
    options: RenderOptions,
    style: ReportStyle,
}

impl ReportRenderer {
    pub fn new(backend: impl RenderBackend + 'static) -> Result<Self> {
        Self::from_shared(Arc::new(backend))
    }

    pub fn from_shared(backend: Arc<dyn RenderBackend>) -> Result<Self> {
        Ok(Self {
            backend,
            template: ReportTemplate::new()?,
            options: RenderOptions::default(),
            style: ReportStyle::default(),
        })
    }

    /// Renderer backed by `wkhtmltopdf` from `PATH`.
    pub fn wkhtmltopdf() -> Result<Self> {
        Self::new(WkhtmltopdfBackend::new())
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn style(&self) -> &ReportStyle {
        &self.style
    }

    /// Builds the complete HTML document without converting it.
    pub fn render_html(&self, summary: &str, advice: &str) -> Result<String> {
        self.render_html_on(Local::now().date_naive(), summary, advice)
    }

    pub fn render_html_on(
        &self,
        generated_on: NaiveDate,
        summary: &str,
        advice: &str,
    ) -> Result<String> {
        self.template.render(
            &self.style,
            &self.options.encoding,
            generated_on,
            &translate(summary),
            &translate(advice),
        )
    }

    /// Writes the report to `output_path`, replacing any existing file.
    pub async fn render(&self, summary: &str, advice: &str, output_path: &Path) -> Result<()> {
        let html = self.render_html(summary, advice)?;
        debug!(
            "Rendering report with {} backend ({} bytes of HTML)",
            self.backend.name(),
            html.len()
        );

        self.backend
            .render(&html, &self.options, output_path)
            .await?;

        info!("PDF report generated: {}", output_path.display());
        Ok(())
    }
}
