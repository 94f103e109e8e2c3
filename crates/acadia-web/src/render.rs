//! Page view model and template rendering.
//!
//! Templates are embedded at compile time. Names end in `.html`, so minijinja
//! auto-escapes every interpolated value.

use acadia_ingestion::DataPreview;
use minijinja::{context, Environment};
use serde::Serialize;

use crate::catalog::{self, Column, Module};

pub const PAGE_TITLE: &str = "Academic Research Platform";

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("nav.html", include_str!("../templates/nav.html"))?;
    env.add_template("dashboard.html", include_str!("../templates/dashboard.html"))?;
    Ok(env)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: Level::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: Level::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: Level::Error, text: text.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct Card {
    #[serde(flatten)]
    pub module: Module,
    /// Set when this card's button was the interaction that triggered the render
    pub notice: Option<Notice>,
}

#[derive(Debug, Default, Serialize)]
pub struct PdfActions {
    pub validate_notice: Option<Notice>,
    /// `Some` once the preview button was pressed
    pub preview: Option<PdfPreviewPanel>,
    pub tip: String,
    /// Characters kept in the text preview
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct PdfPreviewPanel {
    pub text: Option<String>,
    pub error: Option<Notice>,
}

#[derive(Debug, Default, Serialize)]
pub struct UploadSection {
    pub notices: Vec<Notice>,
    pub table: Option<DataPreview>,
    pub shape: Option<String>,
    pub pdf: Option<PdfActions>,
}

#[derive(Debug, Default, Serialize)]
pub struct DashboardView {
    pub left: Vec<Card>,
    pub right: Vec<Card>,
    pub upload: UploadSection,
    pub accept: String,
    /// Pretty-printed JSON of the session's recent results
    pub results: Option<String>,
}

impl DashboardView {
    /// Module cards with the pressed one's message attached.
    pub fn with_cards(pressed: Option<&Module>) -> Self {
        let card = |m: &'static Module| Card {
            module: *m,
            notice: pressed
                .filter(|p| p.slug == m.slug)
                .map(|p| Notice::info(p.message)),
        };
        Self {
            left: catalog::column(Column::Left).map(&card).collect(),
            right: catalog::column(Column::Right).map(&card).collect(),
            ..Default::default()
        }
    }
}

pub fn render_dashboard(env: &Environment<'static>, view: &DashboardView) -> Result<String, minijinja::Error> {
    let nav: Vec<Module> = catalog::nav_hints().copied().collect();
    env.get_template("dashboard.html")?.render(context! {
        title => PAGE_TITLE,
        nav => nav,
        view => view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        let env = environment().unwrap();
        assert!(env.get_template("dashboard.html").is_ok());
        assert!(env.get_template("nav.html").is_ok());
    }

    #[test]
    fn test_pressed_card_gets_message() {
        let pressed = catalog::find("meta-analysis");
        let view = DashboardView::with_cards(pressed);
        let with_notice: Vec<_> = view.left.iter().chain(&view.right)
            .filter_map(|c| c.notice.as_ref())
            .collect();
        assert_eq!(with_notice.len(), 1);
        assert_eq!(with_notice[0].text, "Navigate to 'Meta-Analysis Verification' page using the sidebar menu");
    }

    #[test]
    fn test_values_are_escaped() {
        let env = environment().unwrap();
        let mut view = DashboardView::with_cards(None);
        view.upload.notices.push(Notice::success("Data file uploaded: <script>x</script>.csv"));
        let html = render_dashboard(&env, &view).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>x</script>"));
    }

    #[test]
    fn test_sidebar_uses_nav_titles() {
        let env = environment().unwrap();
        let html = render_dashboard(&env, &DashboardView::with_cards(None)).unwrap();
        assert!(html.contains("<strong>Meta-Analysis Verification</strong>: Validate and recalculate meta-analyses"));
        assert!(!html.contains("<strong>Meta-Analysis Tools</strong>"));
    }
}
