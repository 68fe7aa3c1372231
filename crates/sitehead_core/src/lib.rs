//! Page metadata resolution and document-head rendering for static sites.

pub mod config;
pub mod defaults;
pub mod error;
pub mod front_matter;
pub mod head;
pub mod html;
pub mod layout;
pub mod model;
pub mod resolve;
pub mod url;

pub use crate::defaults::SiteDefaults;
pub use crate::error::MetadataError;
pub use crate::head::{HeadEntry, emit};
pub use crate::model::{PageMetadataInput, ResolvedMetadata, StructuredDataType, TextDirection};
pub use crate::resolve::{resolve, resolve_for_path};
