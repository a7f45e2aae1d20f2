use crate::spectral::ConvolverParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which representation of the input gets blurred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlurMode {
    /// Convert to gray, blur once.
    #[default]
    Gray,
    /// Blur every color channel separately.
    Color,
}

#[derive(Debug, Deserialize)]
pub struct BlurToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(rename = "output")]
    pub output: PathBuf,
    #[serde(default)]
    pub mode: BlurMode,
    #[serde(default)]
    pub convolver: ConvolverParams,
    /// Optional JSON dump of layout and stage timings (gray mode only).
    #[serde(default)]
    pub timing_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BlurToolConfig, String> {
    super::load_json(path)
}
