//! Page rendering with the embedded `index.html` template.

use serde::Serialize;
use tera::{Context, Tera};

use super::ServerError;

const INDEX_TEMPLATE: &str = "index.html";
const INDEX_SOURCE: &str = include_str!("../../templates/index.html");

/// Everything the index page can show. Empty strings and `None` render as blank.
#[derive(Debug, Default, Serialize)]
pub struct IndexPage {
    pub models: Vec<String>,
    pub missing_api_key: bool,
    pub story: Option<String>,
    pub error: Option<String>,
    pub word1: String,
    pub word2: String,
    pub word3: String,
    pub selected_model: String,
}

/// Compiled templates; `.html` names are auto-escaped by Tera.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ServerError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, page: &IndexPage) -> Result<String, ServerError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: IndexPage) -> String {
        PageRenderer::new().unwrap().render_index(&page).unwrap()
    }

    #[test]
    fn empty_page_shows_no_models_placeholder() {
        let html = render(IndexPage::default());
        assert!(html.contains("Nenhum modelo disponível"));
        assert!(!html.contains("id=\"missing-api-key\""));
        assert!(!html.contains("id=\"story\""));
        assert!(!html.contains("id=\"error\""));
    }

    #[test]
    fn missing_key_banner() {
        let html = render(IndexPage {
            missing_api_key: true,
            ..IndexPage::default()
        });
        assert!(html.contains("id=\"missing-api-key\""));
    }

    #[test]
    fn selected_model_is_marked() {
        let html = render(IndexPage {
            models: vec!["gemini-a".into(), "gemini-b".into()],
            selected_model: "gemini-b".into(),
            ..IndexPage::default()
        });
        assert!(html.contains(r#"<option value="gemini-a">gemini-a</option>"#));
        assert!(html.contains(r#"<option value="gemini-b" selected>gemini-b</option>"#));
        assert!(!html.contains("Nenhum modelo disponível"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render(IndexPage {
            word1: "<script>".into(),
            story: Some("<i>oi</i>".into()),
            ..IndexPage::default()
        });
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;i&gt;oi"));
    }
}
