//! Assistant personas and the metadata attached to them

mod catalog;
pub mod llm;

pub use catalog::{Catalog, CatalogError};
pub use llm::{LlmOverride, LlmProviderDescriptor, final_llm};

use crate::ui::color::{IconColor, Palette, icon_color_for};
use serde::{Deserialize, Serialize};

/// A tool attached to a persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool identifier
    pub id: i64,
    /// Tool name, e.g. `SearchTool`
    pub name: String,
}

/// A named set of reference documents attached to a persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    /// Document set identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// A selectable assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Persona identifier. `0` is the placeholder persona.
    pub id: i64,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Attached tools, in display order
    #[serde(default)]
    pub tools: Vec<Tool>,
    /// Attached document sets, in display order
    #[serde(default)]
    pub document_sets: Vec<DocumentSet>,
    /// Model used instead of the provider default
    #[serde(default)]
    pub llm_model_version_override: Option<String>,
    /// Provider used instead of the default provider
    #[serde(default)]
    pub llm_model_provider_override: Option<String>,
    /// Lower sorts first when choosing the initial selection
    #[serde(default)]
    pub display_priority: Option<i32>,
}

impl Persona {
    /// Create a persona with no tools or document sets
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            tools: Vec::new(),
            document_sets: Vec::new(),
            llm_model_version_override: None,
            llm_model_provider_override: None,
            display_priority: None,
        }
    }

    /// Attach a tool
    #[must_use]
    pub fn with_tool(mut self, id: i64, name: impl Into<String>) -> Self {
        self.tools.push(Tool {
            id,
            name: name.into(),
        });
        self
    }

    /// Attach a document set
    #[must_use]
    pub fn with_document_set(mut self, id: i64, name: impl Into<String>) -> Self {
        self.document_sets.push(DocumentSet {
            id,
            name: name.into(),
        });
        self
    }

    /// Override the default model
    #[must_use]
    pub fn with_model_override(mut self, model: impl Into<String>) -> Self {
        self.llm_model_version_override = Some(model.into());
        self
    }

    /// Icon color for this persona in the given palette
    #[must_use]
    pub fn icon_color(&self, palette: Palette) -> IconColor {
        icon_color_for(&self.id, palette)
    }

    /// Model shown on the card: the override when set and non-empty, else `fallback`
    #[must_use]
    pub fn display_model<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.llm_model_version_override
            .as_deref()
            .filter(|model| !model.is_empty())
            .unwrap_or(fallback)
    }
}
