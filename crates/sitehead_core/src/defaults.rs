//! Site-wide fallback values

use crate::error::MetadataError;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CANONICAL_PATH: &str = "/";
pub const DEFAULT_IMAGE: &str = "/og-default.jpg";
pub const DEFAULT_THEME_COLOR: &str = "#f59e0b";

pub const CHARSET: &str = "UTF-8";
pub const VIEWPORT: &str = "width=device-width, initial-scale=1.0";
pub const OG_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Primary language subtags written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

/// Validated, read-only site defaults. Built once at startup and passed by
/// reference into every resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefaults {
    site_name: String,
    site_origin: String,
    default_description: String,
    default_image: String,
    theme_color: String,
}

impl SiteDefaults {
    pub fn new(
        site_name: impl Into<String>,
        site_origin: impl Into<String>,
        default_description: impl Into<String>,
        default_image: impl Into<String>,
        theme_color: impl Into<String>,
    ) -> Result<Self, MetadataError> {
        let site_origin = site_origin.into().trim().to_string();
        validate_origin(&site_origin)?;
        Ok(Self {
            site_name: site_name.into(),
            site_origin,
            default_description: default_description.into(),
            default_image: default_image.into(),
            theme_color: theme_color.into(),
        })
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    pub fn default_description(&self) -> &str {
        &self.default_description
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }
}

fn validate_origin(origin: &str) -> Result<(), MetadataError> {
    let invalid = |reason: String| MetadataError::InvalidSiteOrigin {
        origin: origin.to_string(),
        reason,
    };
    let parsed = ::url::Url::parse(origin).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
