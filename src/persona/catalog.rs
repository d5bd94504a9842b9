//! Persona catalog files

use super::{LlmProviderDescriptor, Persona};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("Failed to read catalog from {}: {source}", .path.display())]
    Read {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not a valid catalog
    #[error("Failed to parse catalog from {}: {source}", .path.display())]
    Parse {
        /// Catalog path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The catalog has no personas to pick from
    #[error("Catalog {} contains no personas", .0.display())]
    Empty(PathBuf),
}

/// Personas and provider metadata shown by the picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Selectable personas
    pub personas: Vec<Persona>,
    /// Configured LLM providers
    #[serde(default)]
    pub llm_providers: Vec<LlmProviderDescriptor>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or lists no personas
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if catalog.personas.is_empty() {
            return Err(CatalogError::Empty(path.to_path_buf()));
        }
        debug!(
            personas = catalog.personas.len(),
            providers = catalog.llm_providers.len(),
            "Loaded catalog from {:?}",
            path
        );
        Ok(catalog)
    }

    /// Built-in catalog used when no file is given
    #[must_use]
    pub fn demo() -> Self {
        let mut general = Persona::new(
            0,
            "Assistant",
            "General assistant that can search connected sources and answer questions.",
        )
        .with_tool(1, "SearchTool");
        general.display_priority = Some(0);

        Self {
            personas: vec![
                general,
                Persona::new(
                    1,
                    "Paraphrase",
                    "Restates answers using only the exact language of the retrieved documents.",
                )
                .with_tool(1, "SearchTool")
                .with_document_set(1, "Engineering Wiki")
                .with_document_set(2, "Support Tickets"),
                Persona::new(
                    2,
                    "Artist",
                    "Turns a description into a generated image.",
                )
                .with_tool(2, "ImageGenerationTool")
                .with_model_override("gpt-4o"),
                Persona::new(3, "Plain", "Chat with the model directly, no tools attached."),
                Persona::new(
                    4,
                    "Analyst",
                    "Answers with inline citations and runs custom lookups.",
                )
                .with_tool(1, "SearchTool")
                .with_tool(9, "InternetSearchTool")
                .with_document_set(3, "Quarterly Reports"),
            ],
            llm_providers: vec![LlmProviderDescriptor {
                name: "Default".to_string(),
                provider: "openai".to_string(),
                default_model_name: "gpt-4-turbo".to_string(),
                fast_default_model_name: Some("gpt-3.5-turbo".to_string()),
                is_default_provider: true,
                model_names: vec!["gpt-4-turbo".to_string(), "gpt-4o".to_string()],
            }],
        }
    }

    /// Persona selected when the picker opens: lowest display priority, then list order
    #[must_use]
    pub fn default_persona(&self) -> Option<&Persona> {
        self.personas
            .iter()
            .enumerate()
            .min_by_key(|(index, persona)| (persona.display_priority.unwrap_or(i32::MAX), *index))
            .map(|(_, persona)| persona)
    }
}
