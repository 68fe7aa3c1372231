//! Page source discovery

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use sitehead_core::model::Diagnostic;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PageSource {
    /// Path relative to the site root, used in diagnostics.
    pub source_path: String,
    /// Path relative to the pages directory, used to derive the request path.
    pub page_path: String,
    pub raw: String,
}

pub fn resolve_dir(root: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

/// Reads every page under `pages_dir`. A page that cannot be read becomes an
/// error diagnostic naming it; the remaining pages are still returned.
pub fn walk_pages(root: &Path, pages_dir: &Path) -> Result<(Vec<PageSource>, Vec<Diagnostic>)> {
    let pages_dir = resolve_dir(root, pages_dir);
    if !pages_dir.is_dir() {
        bail!("pages directory {} does not exist", pages_dir.display());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(&pages_dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to walk {}", pages_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('_'))
        {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    let mut pages = Vec::with_capacity(paths.len());
    let mut diagnostics = Vec::new();
    for path in paths {
        match read_page(root, &pages_dir, &path) {
            Ok(page) => pages.push(page),
            Err(err) => diagnostics.push(Diagnostic::error(
                to_relative_path(root, &path),
                format!("unreadable page: {}", err.root_cause()),
            )),
        }
    }
    Ok((pages, diagnostics))
}

pub fn read_page(root: &Path, pages_dir: &Path, path: &Path) -> Result<PageSource> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(PageSource {
        source_path: to_relative_path(root, path),
        page_path: to_relative_path(pages_dir, path),
        raw,
    })
}

fn to_relative_path(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}
