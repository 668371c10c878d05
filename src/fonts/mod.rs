//! Font resources and the render request handed to the document renderer.
//!
//! The renderer embeds fonts itself; this crate only carries the font file
//! as an opaque base64 payload keyed by family name. Assets are loaded once
//! and shared behind an [`Arc`] by every request built afterwards.
//!
//! ```
//! use std::sync::{Arc, LazyLock};
//! use rechnungsvorlage::core::InvoiceOptions;
//! use rechnungsvorlage::fonts::{render_request, FontAsset, FontMap};
//!
//! static FONTS: LazyLock<FontMap> = LazyLock::new(|| {
//!     // Normally `include_bytes!("Roboto-Regular.ttf")`.
//!     FontMap::roboto(Arc::new(FontAsset::from_bytes(b"\0\x01\0\0")))
//! });
//!
//! let request = render_request(&InvoiceOptions::default(), &FONTS).unwrap();
//! assert!(request.fonts.get("Roboto").is_some());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::core::{InvoiceOptions, TemplateError};
use crate::template::{build_template, DocumentDefinition};

/// Font family the invoice template is designed around.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto";

/// A font file, base64-encoded, passed to the renderer unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct FontAsset {
    base64: String,
}

impl FontAsset {
    /// Wrap raw font bytes (TTF/OTF).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
        }
    }

    /// Wrap an already encoded payload. The text must be valid base64.
    pub fn from_base64(encoded: impl Into<String>) -> Result<Self, TemplateError> {
        let base64 = encoded.into();
        STANDARD
            .decode(base64.as_bytes())
            .map_err(|e| TemplateError::Font(format!("invalid base64 font payload: {e}")))?;
        Ok(Self { base64 })
    }

    pub fn as_base64(&self) -> &str {
        &self.base64
    }

    /// Decode back to the raw font bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TemplateError> {
        STANDARD
            .decode(self.base64.as_bytes())
            .map_err(|e| TemplateError::Font(e.to_string()))
    }
}

impl fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAsset")
            .field("base64_len", &self.base64.len())
            .finish()
    }
}

impl Serialize for FontAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.base64)
    }
}

/// Font family name → font asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMap {
    families: BTreeMap<String, Arc<FontAsset>>,
}

impl FontMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding only the default family.
    pub fn roboto(asset: Arc<FontAsset>) -> Self {
        Self::new().with_family(DEFAULT_FONT_FAMILY, asset)
    }

    pub fn with_family(mut self, family: impl Into<String>, asset: Arc<FontAsset>) -> Self {
        self.families.insert(family.into(), asset);
        self
    }

    pub fn get(&self, family: &str) -> Option<&Arc<FontAsset>> {
        self.families.get(family)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Serialize for FontMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.families.len()))?;
        for (family, asset) in &self.families {
            map.serialize_entry(family, asset.as_ref())?;
        }
        map.end()
    }
}

/// Everything the renderer's constructor takes: the layout tree and fonts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRequest {
    pub definition: DocumentDefinition,
    pub fonts: FontMap,
}

impl RenderRequest {
    pub fn new(definition: DocumentDefinition, fonts: &FontMap) -> Self {
        Self {
            definition,
            fonts: fonts.clone(),
        }
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the invoice template and pair it with the given fonts.
pub fn render_request(
    options: &InvoiceOptions,
    fonts: &FontMap,
) -> Result<RenderRequest, TemplateError> {
    if fonts.get(DEFAULT_FONT_FAMILY).is_none() {
        log::warn!("font map has no {DEFAULT_FONT_FAMILY} family; renderer will fall back");
    }
    Ok(RenderRequest::new(build_template(options)?, fonts))
}
