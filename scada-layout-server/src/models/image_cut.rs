use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Region of the shared icon sheet that one icon occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCut {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Icon name to sheet region, as stored in `TvIconImageCut.yaml`.
pub type ImageCutMap = HashMap<String, ImageCut>;
