//! Page metadata records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(TextDirection::Ltr),
            "rtl" => Ok(TextDirection::Rtl),
            other => Err(format!("unknown text direction '{other}'")),
        }
    }
}

/// schema.org type used for the JSON-LD block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StructuredDataType {
    #[default]
    WebSite,
    LocalBusiness,
    Product,
}

impl StructuredDataType {
    pub fn as_str(self) -> &'static str {
        match self {
            StructuredDataType::WebSite => "WebSite",
            StructuredDataType::LocalBusiness => "LocalBusiness",
            StructuredDataType::Product => "Product",
        }
    }
}

impl fmt::Display for StructuredDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructuredDataType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "website" => Ok(StructuredDataType::WebSite),
            "localbusiness" => Ok(StructuredDataType::LocalBusiness),
            "product" => Ok(StructuredDataType::Product),
            _ => Err(format!("unknown structured data type '{}'", value.trim())),
        }
    }
}

/// Per-page metadata as supplied by a page. Only `title` is required; an empty
/// title is rejected by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadataInput {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub canonical_path: Option<String>,
    pub language: Option<String>,
    pub direction: Option<TextDirection>,
    pub noindex: Option<bool>,
    pub structured_data_type: Option<StructuredDataType>,
}

impl PageMetadataInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_canonical_path(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_noindex(mut self, noindex: bool) -> Self {
        self.noindex = Some(noindex);
        self
    }

    pub fn with_structured_data_type(mut self, kind: StructuredDataType) -> Self {
        self.structured_data_type = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
    pub canonical_path: String,
    pub language: String,
    pub direction: TextDirection,
    pub noindex: bool,
    pub structured_data_type: StructuredDataType,
    pub canonical_url: String,
    pub image_url: String,
    pub site_name: String,
    pub theme_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub source_path: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(source_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            source_path: Some(source_path.into()),
            message: message.into(),
        }
    }

    pub fn warning(source_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            source_path: Some(source_path.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_path {
            Some(path) => write!(f, "{}: {}: {}", self.level.label(), path, self.message),
            None => write!(f, "{}: {}", self.level.label(), self.message),
        }
    }
}
