//! Merges page-supplied metadata with site defaults

use log::debug;

use crate::defaults::{DEFAULT_CANONICAL_PATH, DEFAULT_LANGUAGE, SiteDefaults};
use crate::error::MetadataError;
use crate::model::{PageMetadataInput, ResolvedMetadata, StructuredDataType};
use crate::url::{direction_for_language, is_absolute_url, join_origin};

/// Resolves `input` against `defaults`, using `/` when the page names no
/// canonical path.
pub fn resolve(
    input: &PageMetadataInput,
    defaults: &SiteDefaults,
) -> Result<ResolvedMetadata, MetadataError> {
    resolve_for_path(input, defaults, DEFAULT_CANONICAL_PATH)
}

/// Like [`resolve`], but a missing canonical path falls back to the path the
/// page is served under.
pub fn resolve_for_path(
    input: &PageMetadataInput,
    defaults: &SiteDefaults,
    request_path: &str,
) -> Result<ResolvedMetadata, MetadataError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(MetadataError::invalid_input("title", "must not be empty"));
    }

    let description = or_default(
        input.description.as_deref(),
        defaults.default_description(),
        "description",
    );
    let image = or_default(input.image.as_deref(), defaults.default_image(), "image");
    let canonical_path = or_default(input.canonical_path.as_deref(), request_path, "canonical_path");
    let language = or_default(input.language.as_deref(), DEFAULT_LANGUAGE, "language");
    let direction = match input.direction {
        Some(direction) => direction,
        None => direction_for_language(&language),
    };

    let canonical_url = absolute_url(defaults.site_origin(), &canonical_path, "canonical_path")?;
    let image_url = absolute_url(defaults.site_origin(), &image, "image")?;

    Ok(ResolvedMetadata {
        title: title.to_string(),
        description,
        image,
        canonical_path,
        language,
        direction,
        noindex: input.noindex.unwrap_or(false),
        structured_data_type: input
            .structured_data_type
            .unwrap_or(StructuredDataType::WebSite),
        canonical_url,
        image_url,
        site_name: defaults.site_name().to_string(),
        theme_color: defaults.theme_color().to_string(),
    })
}

fn or_default(value: Option<&str>, default: &str, field: &str) -> String {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None => {
            debug!("{field} not supplied, using '{default}'");
            default.to_string()
        }
    }
}

/// Absolute values come back verbatim; site-relative ones come back in the
/// parsed, percent-encoded form.
fn absolute_url(origin: &str, value: &str, field: &'static str) -> Result<String, MetadataError> {
    let joined = join_origin(origin, value);
    match ::url::Url::parse(&joined) {
        Ok(parsed) if !parsed.cannot_be_a_base() => {
            if is_absolute_url(value.trim()) {
                Ok(joined)
            } else {
                Ok(parsed.into())
            }
        }
        Ok(_) => Err(MetadataError::invalid_input(
            field,
            format!("'{value}' does not form a usable absolute URL"),
        )),
        Err(err) => Err(MetadataError::invalid_input(
            field,
            format!("'{value}' does not form an absolute URL: {err}"),
        )),
    }
}
