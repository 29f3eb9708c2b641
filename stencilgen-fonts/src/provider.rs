//! Font lookup.

use crate::data::FontData;

/// Resolves a typeface name to its loaded data.
///
/// Stencil hosts mount fonts up front — the CLI reads the catalog's
/// files from a directory, the browser registers fetched bytes — so a
/// miss here means the name was never mounted. Callers treat that as a
/// fatal precondition rather than retrying.
pub trait FontProvider {
    /// The font mounted under `name`, or `None` if the host never loaded it.
    fn font(&self, name: &str) -> Option<&FontData>;
}
