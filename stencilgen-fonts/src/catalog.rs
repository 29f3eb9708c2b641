//! Built-in stencil typeface catalog and the in-memory font registry.
//!
//! The catalog is a static alias table for the five stencil-style
//! typefaces the application ships with. The bytes themselves are not
//! embedded: the host loads each TTF (from disk or over the network) and
//! registers it in a [`FontCatalog`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::FontData;
use crate::error::FontError;
use crate::provider::FontProvider;

/// An entry in the built-in typeface catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier used on the command line and in the UI.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// File name of the TTF the host should load.
    pub file: &'static str,
}

/// The built-in stencil typefaces, in presentation order.
///
/// Names are stored lowercase. Lookup should normalize to lowercase
/// before matching.
pub static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "allerta-stencil",
        label: "Allerta Stencil",
        file: "AllertaStencil-Regular.ttf",
    },
    CatalogEntry {
        name: "sirin-stencil",
        label: "Sirin Stencil",
        file: "SirinStencil-Regular.ttf",
    },
    CatalogEntry {
        name: "big-shoulders-stencil",
        label: "Big Shoulders",
        file: "BigShouldersStencil-Regular.ttf",
    },
    CatalogEntry {
        name: "emblema-one",
        label: "Emblema One",
        file: "EmblemaOne-Regular.ttf",
    },
    CatalogEntry {
        name: "stardos-stencil",
        label: "Stardos Stencil",
        file: "StardosStencil-Regular.ttf",
    },
];

/// Look up a catalog entry by name, case-insensitively.
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    let lower = name.to_lowercase();
    ENTRIES.iter().find(|entry| entry.name == lower)
}

/// In-memory font registry fed by the host.
///
/// Font name lookup is case-insensitive: names are normalized to
/// lowercase. Registering a name twice replaces the earlier font.
#[derive(Debug, Default)]
pub struct FontCatalog {
    fonts: HashMap<String, FontData>,
}

impl FontCatalog {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse font bytes and register them under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the bytes are not a valid font.
    pub fn load_font(&mut self, name: &str, bytes: Vec<u8>) -> Result<(), FontError> {
        let font = FontData::from_bytes(Arc::from(bytes.into_boxed_slice()))?;
        self.fonts.insert(name.to_lowercase(), font);
        Ok(())
    }

    /// Number of registered fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no fonts have been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl FontProvider for FontCatalog {
    fn font(&self, name: &str) -> Option<&FontData> {
        self.fonts.get(&name.to_lowercase())
    }
}
