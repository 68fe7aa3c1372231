//! Site-level commands: check, head, build

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;
use sitehead_core::HeadEntry;
use sitehead_core::front_matter::UnknownKeyPolicy;
use sitehead_core::model::{Diagnostic, DiagnosticLevel};

use crate::config_loader::load_defaults_for_site;
use crate::pages::{prepare_page, prepare_pages};
use crate::walk::{read_page, resolve_dir, walk_pages};

#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|diag| diag.level == DiagnosticLevel::Error)
}

/// Parses and resolves every page without writing anything.
pub fn check_site(root: &Path, pages_dir: &Path, policy: UnknownKeyPolicy) -> Result<Vec<Diagnostic>> {
    let defaults = load_defaults_for_site(root)?;
    let (sources, mut diagnostics) = walk_pages(root, pages_dir)?;
    let (pages, page_diagnostics) = prepare_pages(&sources, &defaults, policy);
    diagnostics.extend(page_diagnostics);
    info!("checked {} pages, {} resolved", sources.len(), pages.len());
    Ok(diagnostics)
}

/// Head entries for a single page file. The page must live under `pages_dir`
/// so its request path can be derived.
pub fn page_head(
    root: &Path,
    pages_dir: &Path,
    page: &Path,
    policy: UnknownKeyPolicy,
) -> Result<(Vec<HeadEntry>, Vec<Diagnostic>)> {
    let defaults = load_defaults_for_site(root)?;
    let pages_dir = resolve_dir(root, pages_dir);
    let page = resolve_dir(root, page);
    if !page.starts_with(&pages_dir) {
        bail!(
            "{} is not inside the pages directory {}",
            page.display(),
            pages_dir.display()
        );
    }
    let source = read_page(root, &pages_dir, &page)?;
    let (prepared, diagnostics) = prepare_page(&source, &defaults, policy);
    match prepared {
        Some(prepared) => Ok((prepared.head_entries(), diagnostics)),
        None => {
            let messages: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            bail!("{}", messages.join("\n"))
        }
    }
}

/// Renders every page into `out_dir`. Pages that fail are reported and
/// skipped; the rest are still written.
pub fn build_site(
    root: &Path,
    pages_dir: &Path,
    out_dir: &Path,
    policy: UnknownKeyPolicy,
) -> Result<BuildReport> {
    let defaults = load_defaults_for_site(root)?;
    let (sources, mut diagnostics) = walk_pages(root, pages_dir)?;
    let (pages, page_diagnostics) = prepare_pages(&sources, &defaults, policy);
    diagnostics.extend(page_diagnostics);
    let out_dir = resolve_dir(root, out_dir);

    let mut report = BuildReport {
        written: Vec::with_capacity(pages.len()),
        diagnostics,
    };
    for page in &pages {
        let html = match page.render() {
            Ok(html) => html,
            Err(err) => {
                report
                    .diagnostics
                    .push(Diagnostic::error(&page.source_path, format!("{err:#}")));
                continue;
            }
        };
        let target = out_dir.join(page.output_path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&target, html).with_context(|| format!("failed to write {}", target.display()))?;
        info!("wrote {} -> {}", page.source_path, target.display());
        report.written.push(target);
    }
    Ok(report)
}
