use serde::Serialize;
use tera::{Context, Tera};

use crate::services::grid_view::GridView;
use crate::services::hydration::FormValues;

const PAGE_TEMPLATE: &str = "index.html";

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// Everything the grid page needs
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub form: FormValues,
    pub threshold: f64,
    pub min_threshold: f64,
    pub max_threshold: f64,
    /// Current query string, so the form posts back onto the same state
    pub query: String,
    pub grid: Option<GridView>,
}

/// Service for rendering the grid page with Tera
pub struct TemplateService {
    tera: Tera,
}

impl TemplateService {
    /// Create a template service with the embedded page template
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        // .html name turns on autoescaping
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/index.html"))?;

        tracing::info!(
            templates = tera.get_template_names().count(),
            "Template service initialized"
        );

        Ok(Self { tera })
    }

    /// Render the grid page
    pub fn render_page(&self, page: &PageView) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page)?;
        let html = self.tera.render(PAGE_TEMPLATE, &context)?;
        Ok(html)
    }
}
