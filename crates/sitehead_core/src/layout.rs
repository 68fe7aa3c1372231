//! Shared page layout

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, context};
use pulldown_cmark::{Options, Parser, html};

use crate::model::ResolvedMetadata;

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

fn template_env() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    env.add_template("base.html", BASE_TEMPLATE)?;
    Ok(env)
}

/// Wraps already rendered head markup and body HTML in the site layout.
pub fn render_document(metadata: &ResolvedMetadata, head_html: &str, body_html: &str) -> Result<String> {
    let env = template_env().context("failed to initialize templates")?;
    let template = env
        .get_template("base.html")
        .context("missing base template")?;
    template
        .render(context! {
            language => metadata.language.clone(),
            direction => metadata.direction.as_str(),
            head_html => head_html,
            body_html => body_html,
        })
        .context("failed to render base template")
}

pub fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(md, options);
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StructuredDataType, TextDirection};

    fn metadata(language: &str, direction: TextDirection) -> ResolvedMetadata {
        ResolvedMetadata {
            title: "Home".to_string(),
            description: "Bakery".to_string(),
            image: "/og-default.jpg".to_string(),
            canonical_path: "/".to_string(),
            language: language.to_string(),
            direction,
            noindex: false,
            structured_data_type: StructuredDataType::WebSite,
            canonical_url: "https://example.com/".to_string(),
            image_url: "https://example.com/og-default.jpg".to_string(),
            site_name: "Bakery".to_string(),
            theme_color: "#000000".to_string(),
        }
    }

    #[test]
    fn html_element_carries_language_and_direction() {
        let doc = render_document(&metadata("ar", TextDirection::Rtl), "", "<p>x</p>")
            .expect("render");
        assert!(doc.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(doc.contains("<p>x</p>"));
    }

    #[test]
    fn language_is_escaped() {
        let doc = render_document(&metadata("en\"><script>", TextDirection::Ltr), "", "")
            .expect("render");
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn head_markup_is_not_escaped() {
        let doc = render_document(
            &metadata("en", TextDirection::Ltr),
            "<title>Home</title>\n",
            "",
        )
        .expect("render");
        assert!(doc.contains("<head>\n<title>Home</title>\n</head>"));
    }

    #[test]
    fn markdown_tables_render() {
        let html = render_markdown("| Item | Price |\n|---|---|\n| Baklava | 4 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Baklava</td>"));
    }
}
