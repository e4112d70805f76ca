//! The rendered icon value.

use crate::attributes::Attributes;

/// Read-only result of resolving and formatting an icon.
///
/// Purely a data carrier for the rendering boundary: the bare name, the raw
/// SVG markup, and the final attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    content: String,
    attributes: Attributes,
}

impl Icon {
    pub(crate) fn new(name: String, content: String, attributes: Attributes) -> Self {
        Self {
            name,
            content,
            attributes,
        }
    }

    /// Bare icon name, with the set prefix stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw SVG markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Final attribute mapping, including the computed `class`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
