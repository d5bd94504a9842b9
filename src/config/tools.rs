//! Friendly labels for tool badges

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How one tool name is displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLabel {
    /// Text shown on the badge
    pub label: String,
    /// Glyph drawn before the label
    #[serde(default)]
    pub icon: Option<String>,
}

/// Label and icon resolved for a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolBadge<'a> {
    /// Text shown on the badge
    pub label: &'a str,
    /// Glyph drawn before the label
    pub icon: Option<&'a str>,
}

/// Mapping from tool names to friendly labels.
///
/// Names missing from the table are shown verbatim with no icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolLabels {
    labels: BTreeMap<String, ToolLabel>,
}

impl Default for ToolLabels {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(
            "SearchTool".to_string(),
            ToolLabel {
                label: "Search".to_string(),
                icon: Some("⌕".to_string()),
            },
        );
        labels.insert(
            "ImageGenerationTool".to_string(),
            ToolLabel {
                label: "Image Generation".to_string(),
                icon: Some("▣".to_string()),
            },
        );
        Self { labels }
    }
}

impl ToolLabels {
    /// Empty table: every tool shows its raw name
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Add or replace a mapping
    pub fn insert(&mut self, tool_name: impl Into<String>, label: ToolLabel) {
        self.labels.insert(tool_name.into(), label);
    }

    /// Fill in any default mapping the table does not define
    pub fn merge_defaults(&mut self) {
        for (name, label) in Self::default().labels {
            self.labels.entry(name).or_insert(label);
        }
    }

    /// Resolve the badge for a tool name
    #[must_use]
    pub fn resolve<'a>(&'a self, tool_name: &'a str) -> ToolBadge<'a> {
        self.labels.get(tool_name).map_or(
            ToolBadge {
                label: tool_name,
                icon: None,
            },
            |known| ToolBadge {
                label: &known.label,
                icon: known.icon.as_deref(),
            },
        )
    }
}
