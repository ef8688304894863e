use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorSettings {
    pub show_special_labels: bool,
    pub show_bone_positions: bool,
    pub pretty_json: bool,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            show_special_labels: true,
            show_bone_positions: false,
            pretty_json: true,
        }
    }
}

impl InspectorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "inspector").unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "inspector", self);
    }
}
