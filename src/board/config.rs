//! Board configuration: lanes and optional starter cards.
//!
//! # Examples
//!
//! ```
//! use laneboard::board::config::BoardConfig;
//!
//! let config = BoardConfig::from_json_str(
//!     r##"{ "lanes": [{ "id": "todo", "title": "TODO", "accent": "#fef08a" }] }"##,
//! )?;
//! assert_eq!(config.lanes.len(), 1);
//! assert!(config.seed_cards.is_empty());
//! # Ok::<(), laneboard::board::config::BoardConfigError>(())
//! ```

use crate::board::domain::{BoardDomainError, Lane, LaneId, LaneSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration document is not valid JSON for the schema.
    #[error("invalid board configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration violates a domain rule.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// One configured lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Lane identifier, used as the card `column` value.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Heading accent colour.
    #[serde(default)]
    pub accent: String,
}

impl LaneConfig {
    /// Creates a lane entry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accent: accent.into(),
        }
    }
}

/// A card placed on the board when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCard {
    /// Fixed card identifier.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Lane the card starts in.
    pub column: String,
}

impl SeedCard {
    /// Creates a seed card entry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column: column.into(),
        }
    }
}

/// Board configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Lanes in display order.
    pub lanes: Vec<LaneConfig>,
    /// Cards present when the board starts, in store order.
    #[serde(default)]
    pub seed_cards: Vec<SeedCard>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl BoardConfig {
    /// The four-lane reference board with no cards.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            lanes: vec![
                LaneConfig::new("backlog", "Backlog", "#737373"),
                LaneConfig::new("todo", "TODO", "#fef08a"),
                LaneConfig::new("doing", "In progress", "#bfdbfe"),
                LaneConfig::new("done", "Complete", "#a7f3d0"),
            ],
            seed_cards: Vec::new(),
        }
    }

    /// The reference board pre-populated with starter cards.
    #[must_use]
    pub fn with_demo_cards() -> Self {
        Self {
            seed_cards: vec![
                SeedCard::new("1", "Look into render bug in dashboard", "backlog"),
                SeedCard::new("2", "SOX compliance checklist", "backlog"),
                SeedCard::new("3", "[SPIKE] Migrate to Azure", "backlog"),
                SeedCard::new("4", "Document Notifications service", "backlog"),
                SeedCard::new("5", "Research DB options for new microservice", "todo"),
                SeedCard::new("6", "Postmortem for outage", "todo"),
                SeedCard::new("7", "Sync with product on Q3 roadmap", "todo"),
                SeedCard::new("8", "Refactor context providers to use Zustand", "doing"),
                SeedCard::new("9", "Add logging to daily CRON", "doing"),
                SeedCard::new("10", "Set up DD dashboards for Lambda listener", "done"),
            ],
            ..Self::reference()
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Json`] when the document does not match
    /// the schema.
    pub fn from_json_str(json: &str) -> Result<Self, BoardConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the configured lanes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Domain`] for blank, duplicate or missing
    /// lanes.
    pub fn lane_set(&self) -> Result<LaneSet, BoardConfigError> {
        let lanes = self
            .lanes
            .iter()
            .map(|lane| {
                LaneId::new(lane.id.as_str())
                    .map(|id| Lane::new(id, lane.title.as_str(), lane.accent.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LaneSet::new(lanes)?)
    }
}
