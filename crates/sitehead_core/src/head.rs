//! Ordered document-head entries derived from resolved metadata

use serde::Serialize;
use serde_json::{Value, json};

use crate::defaults::{CHARSET, OG_TYPE, SCHEMA_CONTEXT, TWITTER_CARD, VIEWPORT};
use crate::model::ResolvedMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeadEntry {
    Charset {
        charset: String,
    },
    Title {
        text: String,
    },
    Meta {
        attribute: MetaAttribute,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        crossorigin: Option<String>,
    },
    #[serde(rename = "jsonld")]
    JsonLd {
        payload: Value,
    },
}

impl HeadEntry {
    fn name(key: &str, content: impl Into<String>) -> Self {
        HeadEntry::Meta {
            attribute: MetaAttribute::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        HeadEntry::Meta {
            attribute: MetaAttribute::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }

    /// The `name`/`property` key of a meta entry, if this is one.
    pub fn meta_key(&self) -> Option<&str> {
        match self {
            HeadEntry::Meta { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Produces head entries in a fixed order: charset, viewport, title,
/// description, canonical, robots (only for noindex pages), Open Graph,
/// Twitter Card, theme-color, JSON-LD.
pub fn emit(metadata: &ResolvedMetadata) -> Vec<HeadEntry> {
    let mut entries = Vec::with_capacity(18);
    entries.push(HeadEntry::Charset {
        charset: CHARSET.to_string(),
    });
    entries.push(HeadEntry::name("viewport", VIEWPORT));
    entries.push(HeadEntry::Title {
        text: metadata.title.clone(),
    });
    entries.push(HeadEntry::name("description", &metadata.description));
    entries.push(HeadEntry::Link {
        rel: "canonical".to_string(),
        href: metadata.canonical_url.clone(),
        crossorigin: None,
    });
    if metadata.noindex {
        entries.push(HeadEntry::name("robots", "noindex"));
    }

    entries.push(HeadEntry::property("og:type", OG_TYPE));
    entries.push(HeadEntry::property("og:title", &metadata.title));
    entries.push(HeadEntry::property("og:description", &metadata.description));
    entries.push(HeadEntry::property("og:image", &metadata.image_url));
    entries.push(HeadEntry::property("og:url", &metadata.canonical_url));

    entries.push(HeadEntry::name("twitter:card", TWITTER_CARD));
    entries.push(HeadEntry::name("twitter:title", &metadata.title));
    entries.push(HeadEntry::name("twitter:description", &metadata.description));
    entries.push(HeadEntry::name("twitter:image", &metadata.image_url));

    entries.push(HeadEntry::name("theme-color", &metadata.theme_color));
    entries.push(HeadEntry::JsonLd {
        payload: structured_data(metadata),
    });
    entries
}

pub fn structured_data(metadata: &ResolvedMetadata) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": metadata.structured_data_type.as_str(),
        "name": metadata.site_name,
        "description": metadata.description,
        "url": metadata.canonical_url,
    })
}
