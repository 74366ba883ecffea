use crate::{
    error::{MotifMarkError, Result},
    layout::LaneStrategy,
};
use motif_mark_render::RenderSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub render: RenderSettings,
    pub lanes: LaneStrategy,
    /// Lay out sequences on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            lanes: LaneStrategy::default(),
            parallel: true,
        }
    }
}

impl RunSettings {
    pub fn load_from_path(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MotifMarkError::io(format!("could not read settings file '{path}'"), e))?;
        serde_json::from_str(&text).map_err(|e| MotifMarkError::Json {
            path: path.to_string(),
            source: e,
        })
    }

    pub fn save_to_path(&self, path: &str) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| MotifMarkError::Json {
            path: path.to_string(),
            source: e,
        })?;
        std::fs::write(path, text)
            .map_err(|e| MotifMarkError::io(format!("could not write settings file '{path}'"), e))
    }
}
