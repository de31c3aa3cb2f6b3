//! YAML track description

pub mod path;

use serde::{Deserialize, Serialize};

use crate::camera::FollowParams;
use crate::error::TrackError;
use crate::mesh::{RibbonBuilder, RibbonParams, RibbonTrack};

pub use path::{HelixPath, MAX_PATH_POINTS, PathSource};

/// Everything needed to build a track and ride it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(default)]
    pub path: PathSource,
    #[serde(default)]
    pub ribbon: RibbonParams,
    #[serde(default)]
    pub camera: FollowParams,
}

impl TrackConfig {
    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, TrackError> {
        let config: TrackConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, TrackError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), TrackError> {
        self.ribbon.validate()?;
        self.camera.validate()
    }

    /// Generate the path and extrude the track mesh
    pub fn build(&self) -> Result<RibbonTrack, TrackError> {
        let path = self.path.generate()?;
        RibbonBuilder::new(self.ribbon).build(&path)
    }
}
