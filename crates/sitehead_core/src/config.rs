use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::defaults::{DEFAULT_IMAGE, DEFAULT_THEME_COLOR, SiteDefaults};

#[derive(Debug, Deserialize)]
struct SiteConfigRaw {
    site: Option<SiteMetaRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteMetaRaw {
    name: Option<String>,
    origin: Option<String>,
    description: Option<String>,
    image: Option<String>,
    theme_color: Option<String>,
}

pub fn load_site_defaults(path: &Path) -> Result<SiteDefaults> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_site_defaults(&raw).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_site_defaults(raw: &str) -> Result<SiteDefaults> {
    let parsed: SiteConfigRaw =
        serde_yaml::from_str(raw).context("failed to parse YAML config")?;
    let Some(site) = parsed.site else {
        bail!("missing required section: site");
    };
    let defaults = SiteDefaults::new(
        required_string(site.name, "site.name")?,
        required_string(site.origin, "site.origin")?,
        required_string(site.description, "site.description")?,
        non_empty_or_default(site.image, DEFAULT_IMAGE, "site.image")?,
        non_empty_or_default(site.theme_color, DEFAULT_THEME_COLOR, "site.theme_color")?,
    )?;
    Ok(defaults)
}

fn required_string(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => bail!("missing required field: {}", field),
    }
}

fn non_empty_or_default(value: Option<String>, default: &str, field: &str) -> Result<String> {
    match value {
        Some(text) => {
            if text.trim().is_empty() {
                bail!("{field} must not be empty");
            }
            Ok(text.trim().to_string())
        }
        None => Ok(default.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = "site:\n  name: \"AL-NOOR BAKERY\"\n  origin: \"https://alnoor-bakery.vercel.app\"\n  description: \"Authentic halal baked goods and meals\"\n";

    #[test]
    fn valid_minimal_config_parses() {
        let defaults = parse_site_defaults(MINIMAL).expect("config should load");
        assert_eq!(defaults.site_name(), "AL-NOOR BAKERY");
        assert_eq!(defaults.site_origin(), "https://alnoor-bakery.vercel.app");
    }

    #[test]
    fn image_and_theme_defaults_apply_when_missing() {
        let defaults = parse_site_defaults(MINIMAL).expect("config should load");
        assert_eq!(defaults.default_image(), "/og-default.jpg");
        assert_eq!(defaults.theme_color(), "#f59e0b");
    }

    #[test]
    fn missing_required_field_fails() {
        let err = parse_site_defaults(
            "site:\n  name: \"Bakery\"\n  description: \"Bread\"\n",
        )
        .expect_err("expected error");
        assert!(err.to_string().contains("site.origin"));
    }

    #[test]
    fn missing_site_section_fails() {
        let err = parse_site_defaults("other: 1\n").expect_err("expected error");
        assert!(err.to_string().contains("site"));
    }

    #[test]
    fn blank_theme_color_fails() {
        let err = parse_site_defaults(&format!("{MINIMAL}  theme_color: \"  \"\n"))
            .expect_err("expected error");
        assert!(err.to_string().contains("site.theme_color must not be empty"));
    }

    #[test]
    fn unknown_site_key_fails() {
        let err = parse_site_defaults(&format!("{MINIMAL}  colour: \"#fff\"\n"))
            .expect_err("expected error");
        assert!(format!("{err:#}").contains("colour"));
    }

    #[test]
    fn relative_origin_fails_at_load() {
        let err = parse_site_defaults(
            "site:\n  name: \"Bakery\"\n  origin: \"alnoor-bakery\"\n  description: \"Bread\"\n",
        )
        .expect_err("expected error");
        let invalid = err
            .downcast_ref::<crate::error::MetadataError>()
            .expect("metadata error");
        assert!(matches!(
            invalid,
            crate::error::MetadataError::InvalidSiteOrigin { .. }
        ));
    }

    #[test]
    fn load_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"site:\n  name: \"Bakery\"\n").expect("write");
        let err = load_site_defaults(file.path()).expect_err("expected error");
        let message = format!("{err:#}");
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("site.origin"));
    }
}
