use crate::estimator::EstimatorParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DirectionToolConfig {
    /// Mask image; any sample > 0 is foreground.
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub estimator: EstimatorParams,
    #[serde(default)]
    pub output: DirectionOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DirectionOutputConfig {
    /// Where to write the JSON report; stdout when absent.
    pub report_json: Option<PathBuf>,
    /// Directory receiving zone masks and the smoothed mask.
    pub debug_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DirectionToolConfig, String> {
    super::load_json(path)
}
