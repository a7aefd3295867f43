use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// One card in the reel. Only `height` feeds the layout; the rest is payload
/// for whoever renders the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub height: f64,
    #[serde(default)]
    pub title: String,
}

impl ReelItem {
    pub fn new(height: f64, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            height,
            title: title.into(),
        }
    }
}

/// Collects the layout input for a slice of items
pub fn heights_of(items: &[ReelItem]) -> Vec<f64> {
    items.iter().map(|item| item.height).collect()
}

/// On-disk list of items, either TOML (`[[items]]` tables) or JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSource {
    #[serde(default)]
    pub items: Vec<ReelItem>,
}

impl ItemSource {
    /// Load items from a file; the format is picked by extension (`.json` or TOML otherwise)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let source = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        tracing::debug!(path = %path.display(), count = source.items.len(), "Loaded item source");
        Ok(source)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ItemSource(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build unnamed items from bare heights
    pub fn from_heights(heights: &[f64]) -> Self {
        Self {
            items: heights
                .iter()
                .enumerate()
                .map(|(i, &height)| ReelItem::new(height, format!("#{}", i + 1)))
                .collect(),
        }
    }
}
