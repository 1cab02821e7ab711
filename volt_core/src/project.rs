//! # Project Data Structures
//!
//! The `Project` struct is the root container for all calculation data.
//! Projects serialize to `.vlt` (Voltcalc) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, electrician, job info, timestamps)
//! ├── settings: GlobalSettings (code edition, defaults, drop limit)
//! └── items: HashMap<Uuid, CalculationItem> (all saved calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use volt_core::project::Project;
//!
//! let mut project = Project::new("Pat Sparks", "26-014", "Harbor Mill LLC");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//!
//! // Save to file (see file_io module for atomic saves)
//! std::fs::write("jobsite.vlt", &json).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationItem;
use crate::materials::ConductorMaterial;

/// Current schema version for .vlt files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.vlt` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, electrician, job info)
    pub meta: ProjectMetadata,

    /// Global settings (code edition, defaults)
    pub settings: GlobalSettings,

    /// All saved calculations, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup when a calculation references another
    /// - No duplicate ID issues
    /// - Stable references when items are reordered
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `electrician` - Name of the responsible electrician
    /// * `job_id` - Job/work-order number (e.g. "26-014")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use volt_core::project::Project;
    ///
    /// let project = Project::new("Pat Sparks", "26-014", "Harbor Mill LLC");
    /// assert_eq!(project.meta.electrician, "Pat Sparks");
    /// ```
    pub fn new(electrician: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                electrician: electrician.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use volt_core::project::Project;
    /// use volt_core::calculations::CalculationItem;
    /// use volt_core::network::NetworkInput;
    ///
    /// let mut project = Project::new("Electrician", "26-001", "Client");
    ///
    /// let id = project.add_item(CalculationItem::ResistanceNetwork(
    ///     NetworkInput::new("Heater bank"),
    /// ));
    /// assert!(project.items.contains_key(&id));
    /// ```
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is found.
    /// The caller should be aware that getting a mutable reference marks
    /// the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of saved calculations.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible electrician
    pub electrician: String,

    /// Job/work-order number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Code edition in effect (e.g. "NEC2023")
    pub code: String,

    /// Default system voltage for new calculations
    pub default_volts: f64,

    /// Default conductor material for new calculations
    pub default_conductor: ConductorMaterial,

    /// Voltage-drop limit used for pass/fail display, in percent
    pub max_voltage_drop_percent: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "NEC2023".to_string(),
            default_volts: 480.0,
            default_conductor: ConductorMaterial::Copper,
            max_voltage_drop_percent: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CalculationItem;
    use crate::network::NetworkInput;

    #[test]
    fn test_project_creation() {
        let project = Project::new("Pat Sparks", "26-014", "Harbor Mill LLC");
        assert_eq!(project.meta.electrician, "Pat Sparks");
        assert_eq!(project.meta.job_id, "26-014");
        assert_eq!(project.meta.client, "Harbor Mill LLC");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Pat Sparks", "26-014", "Test Client");
        let json = serde_json::to_string_pretty(&project).unwrap();

        // Should contain key fields
        assert!(json.contains("Pat Sparks"));
        assert!(json.contains("26-014"));
        assert!(json.contains("NEC2023"));

        // Roundtrip
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.electrician, "Pat Sparks");
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Electrician", "26-001", "Client");

        let id = project.add_item(CalculationItem::ResistanceNetwork(NetworkInput::new(
            "Heater bank",
        )));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());
        assert_eq!(project.get_item(&id).unwrap().label(), "Heater bank");

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
    }

    #[test]
    fn test_default_settings() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.code, "NEC2023");
        assert_eq!(settings.default_volts, 480.0);
        assert_eq!(settings.default_conductor, ConductorMaterial::Copper);
        assert_eq!(settings.max_voltage_drop_percent, 3.0);
    }

    #[test]
    fn test_mixed_items_roundtrip() {
        use crate::calculations::box_fill::BoxFillInput;
        use crate::materials::WireSize;

        let mut project = Project::new("Electrician", "26-001", "Client");
        project.add_item(CalculationItem::ResistanceNetwork(NetworkInput::new("Net")));
        project.add_item(CalculationItem::BoxFill(BoxFillInput {
            label: "Box".to_string(),
            wire: WireSize::Awg12,
            conductors: 4,
            device_yokes: 1,
            clamps: 0,
            grounds: 1,
        }));

        let json = serde_json::to_string(&project).unwrap();
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.item_count(), 2);
    }
}
