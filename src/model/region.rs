//! Region tags and the region selection used to filter questions.

use serde::{Deserialize, Serialize};

/// Region id that acts as the "show every question" sentinel.
pub const SHOW_ALL_REGION_ID: &str = "Global";

/// A selectable region as offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionOption {
    /// Tag matched against question region lists
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Regions offered by the built-in questionnaire, in display order.
pub const BUILTIN_REGIONS: &[RegionOption] = &[
    RegionOption {
        id: "USA",
        name: "United States",
    },
    RegionOption {
        id: "EU",
        name: "European Union",
    },
    RegionOption {
        id: "UK",
        name: "United Kingdom",
    },
    RegionOption {
        id: SHOW_ALL_REGION_ID,
        name: "Other / Global (Show all questions)",
    },
];

/// The user's current region choice.
///
/// `Unselected` and `All` are deliberately distinct: before a region is
/// picked only region-neutral questions are shown, while `All` shows the
/// whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "region", rename_all = "snake_case")]
pub enum RegionSelection {
    /// No region picked yet
    #[default]
    Unselected,
    /// Show every question regardless of region tags
    All,
    /// A concrete region tag such as `EU`
    Region(String),
}

impl RegionSelection {
    /// Build a selection from a region id, mapping the show-all id to [`RegionSelection::All`]
    /// and a blank id to [`RegionSelection::Unselected`].
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() {
            Self::Unselected
        } else if id.eq_ignore_ascii_case(SHOW_ALL_REGION_ID) || id.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Region(id.to_string())
        }
    }

    /// Build a selection from an optional region id
    pub fn from_option(id: Option<&str>) -> Self {
        id.map_or(Self::Unselected, Self::from_id)
    }

    /// Whether the user has made any choice yet
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }

    /// Display name for reports
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Unselected => "Not selected".to_string(),
            Self::All => region_name(SHOW_ALL_REGION_ID)
                .unwrap_or(SHOW_ALL_REGION_ID)
                .to_string(),
            Self::Region(id) => region_name(id).map_or_else(|| id.clone(), str::to_string),
        }
    }
}

impl std::fmt::Display for RegionSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unselected => write!(f, "none"),
            Self::All => write!(f, "{SHOW_ALL_REGION_ID}"),
            Self::Region(id) => write!(f, "{id}"),
        }
    }
}

/// Look up the display name of a built-in region id
#[must_use]
pub fn region_name(id: &str) -> Option<&'static str> {
    BUILTIN_REGIONS
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.name)
}
