//! LLM provider metadata and default-model resolution

use super::Persona;
use serde::{Deserialize, Serialize};

/// A configured LLM provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmProviderDescriptor {
    /// Display name of the provider configuration
    pub name: String,
    /// Provider key, e.g. `openai`
    pub provider: String,
    /// Model used when nothing overrides it
    pub default_model_name: String,
    /// Cheaper model for secondary flows
    #[serde(default)]
    pub fast_default_model_name: Option<String>,
    /// Whether this is the workspace default
    #[serde(default)]
    pub is_default_provider: bool,
    /// Models offered by the provider
    #[serde(default)]
    pub model_names: Vec<String>,
}

/// An explicit provider/model choice that beats every default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmOverride {
    /// Provider key
    pub provider: String,
    /// Model name
    pub model_version: String,
}

/// Resolve the `(provider, model)` pair to use.
///
/// Starts from the default provider (or the first one when none is
/// flagged), then applies the persona's overrides, then `llm_override`.
/// Empty override strings are ignored.
#[must_use]
pub fn final_llm(
    providers: &[LlmProviderDescriptor],
    persona: Option<&Persona>,
    llm_override: Option<&LlmOverride>,
) -> (String, String) {
    let base = providers
        .iter()
        .find(|provider| provider.is_default_provider)
        .or_else(|| providers.first());

    let mut provider = base.map_or_else(String::new, |p| p.provider.clone());
    let mut model = base.map_or_else(String::new, |p| p.default_model_name.clone());

    if let Some(persona) = persona {
        if let Some(value) = non_empty(persona.llm_model_provider_override.as_deref()) {
            provider = value.to_string();
        }
        if let Some(value) = non_empty(persona.llm_model_version_override.as_deref()) {
            model = value.to_string();
        }
    }

    if let Some(choice) = llm_override {
        if let Some(value) = non_empty(Some(&choice.provider)) {
            provider = value.to_string();
        }
        if let Some(value) = non_empty(Some(&choice.model_version)) {
            model = value.to_string();
        }
    }

    (provider, model)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
