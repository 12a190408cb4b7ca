//! Scene documents as stored by the consuming system.
//!
//! A document is either a single scene object or an array of scenes. Files may
//! be plain JSON or gzip-compressed JSON; compression is detected from the
//! content, not the file name. Documents are only ever read here and rendered
//! back to text; writing them out is up to the caller.

mod error;
mod read;
mod render;

pub use error::DocumentError;
pub use read::{
    DEFAULT_MAX_DOCUMENT_BYTES, LoadedDocument, ReadOptions, parse_document, read_document,
    read_document_file,
};
pub use render::{OutputStyle, render_document, render_scene};

use crate::model::SceneInfo;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level shape of a scene document.
///
/// Serialises back to the same shape it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SceneDocument {
    /// A JSON array of scenes
    Collection(Vec<SceneInfo>),
    /// A single scene object
    Single(SceneInfo),
}

impl SceneDocument {
    pub fn scenes(&self) -> &[SceneInfo] {
        match self {
            SceneDocument::Collection(scenes) => scenes,
            SceneDocument::Single(scene) => std::slice::from_ref(scene),
        }
    }

    pub fn into_scenes(self) -> Vec<SceneInfo> {
        match self {
            SceneDocument::Collection(scenes) => scenes,
            SceneDocument::Single(scene) => vec![scene],
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, SceneDocument::Collection(_))
    }

    /// Total number of colour entries across all scenes.
    pub fn colour_count(&self) -> usize {
        self.scenes().iter().map(SceneInfo::len).sum()
    }
}

impl From<SceneInfo> for SceneDocument {
    fn from(scene: SceneInfo) -> Self {
        SceneDocument::Single(scene)
    }
}

impl From<Vec<SceneInfo>> for SceneDocument {
    fn from(scenes: Vec<SceneInfo>) -> Self {
        SceneDocument::Collection(scenes)
    }
}
