//! HTML serialization of head entries

use crate::head::HeadEntry;

pub fn render_head(entries: &[HeadEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_entry(entry));
        out.push('\n');
    }
    out
}

pub fn render_entry(entry: &HeadEntry) -> String {
    match entry {
        HeadEntry::Charset { charset } => format!("<meta charset=\"{}\">", escape_html(charset)),
        HeadEntry::Title { text } => format!("<title>{}</title>", escape_html(text)),
        HeadEntry::Meta {
            attribute,
            key,
            content,
        } => format!(
            "<meta {}=\"{}\" content=\"{}\">",
            attribute.as_str(),
            escape_html(key),
            escape_html(content)
        ),
        HeadEntry::Link {
            rel,
            href,
            crossorigin,
        } => match crossorigin {
            Some(mode) => format!(
                "<link rel=\"{}\" href=\"{}\" crossorigin=\"{}\">",
                escape_html(rel),
                escape_html(href),
                escape_html(mode)
            ),
            None => format!(
                "<link rel=\"{}\" href=\"{}\">",
                escape_html(rel),
                escape_html(href)
            ),
        },
        HeadEntry::JsonLd { payload } => format!(
            "<script type=\"application/ld+json\">{}</script>",
            escape_script_json(&payload.to_string())
        ),
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// `<`, `>` and `&` only ever appear inside JSON strings, so the unicode escapes
// keep the payload equivalent while it can no longer close the script element.
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}
