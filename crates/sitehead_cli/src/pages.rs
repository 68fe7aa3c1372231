//! Per-page metadata resolution and rendering

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use sitehead_core::front_matter::{UnknownKeyPolicy, parse_front_matter, split_front_matter};
use sitehead_core::html::render_head;
use sitehead_core::layout::{render_document, render_markdown};
use sitehead_core::model::Diagnostic;
use sitehead_core::url::request_path_for_source;
use sitehead_core::{HeadEntry, PageMetadataInput, ResolvedMetadata, SiteDefaults, emit, resolve_for_path};

use crate::walk::PageSource;

#[derive(Debug, Clone)]
pub struct PreparedPage {
    pub source_path: String,
    pub request_path: String,
    pub metadata: ResolvedMetadata,
    pub body_markdown: String,
}

impl PreparedPage {
    pub fn head_entries(&self) -> Vec<HeadEntry> {
        emit(&self.metadata)
    }

    pub fn render(&self) -> Result<String> {
        let head_html = render_head(&self.head_entries());
        let body_html = render_markdown(&self.body_markdown);
        render_document(&self.metadata, &head_html, &body_html)
            .with_context(|| format!("failed to render {}", self.source_path))
    }

    /// Output file for this page, relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.request_path)
    }
}

/// Parses and resolves one page. Any failure is reported as diagnostics that
/// name the page source; warnings may accompany a successful page.
pub fn prepare_page(
    source: &PageSource,
    defaults: &SiteDefaults,
    policy: UnknownKeyPolicy,
) -> (Option<PreparedPage>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let (header, body) = split_front_matter(&source.raw);
    let input = match header {
        Some(text) => match parse_front_matter(text, policy) {
            Ok(parsed) => {
                for key in parsed.unknown_keys {
                    diagnostics.push(Diagnostic::warning(
                        &source.source_path,
                        format!("unknown header key: {key}"),
                    ));
                }
                parsed.input
            }
            Err(err) => {
                diagnostics.push(Diagnostic::error(&source.source_path, err.to_string()));
                return (None, diagnostics);
            }
        },
        None => PageMetadataInput::default(),
    };

    let request_path = request_path_for_source(&source.page_path);
    match resolve_for_path(&input, defaults, &request_path) {
        Ok(metadata) => {
            debug!("resolved {} -> {}", source.source_path, metadata.canonical_url);
            let page = PreparedPage {
                source_path: source.source_path.clone(),
                request_path,
                metadata,
                body_markdown: body.to_string(),
            };
            (Some(page), diagnostics)
        }
        Err(err) => {
            diagnostics.push(Diagnostic::error(&source.source_path, err.to_string()));
            (None, diagnostics)
        }
    }
}

pub fn prepare_pages(
    sources: &[PageSource],
    defaults: &SiteDefaults,
    policy: UnknownKeyPolicy,
) -> (Vec<PreparedPage>, Vec<Diagnostic>) {
    let mut pages = Vec::with_capacity(sources.len());
    let mut diagnostics = Vec::new();
    let mut claimed: HashMap<PathBuf, String> = HashMap::new();
    for source in sources {
        let (page, page_diagnostics) = prepare_page(source, defaults, policy);
        diagnostics.extend(page_diagnostics);
        let Some(page) = page else {
            continue;
        };
        let output = page.output_path();
        if let Some(existing) = claimed.get(&output) {
            diagnostics.push(Diagnostic::error(
                &page.source_path,
                format!(
                    "output collision at {} (already used by {})",
                    output.display(),
                    existing
                ),
            ));
            continue;
        }
        claimed.insert(output, page.source_path.clone());
        pages.push(page);
    }
    (pages, diagnostics)
}

pub fn output_path_for(request_path: &str) -> PathBuf {
    let logical = request_path.trim_matches('/');
    if logical.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(format!("{logical}/index.html"))
    }
}
