//! Typed notifications emitted by the filter controller.

use serde::{Deserialize, Serialize};

use crate::catalog::CategorySelection;
use crate::search::LaptopPreferences;

/// Something other views may want to react to.
///
/// The controller queues these; consumers drain them after each
/// interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// The selected category changed.
    CategoryChanged {
        category: CategorySelection,
        /// The laptop advisor should be offered.
        prompt_laptop_advisor: bool,
    },
    /// Laptop advisor preferences were applied to the filters.
    LaptopPreferencesApplied(LaptopPreferences),
    /// Every filter was reset to its default.
    FiltersReset,
}
