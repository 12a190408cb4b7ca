//! Colour and scene records exchanged with the lighting notebooks as JSON.
//!
//! These are plain values: no validation, no conversion between colour
//! spaces. Field names serialise as-is (`r`, `xy`, `brightness`, `colours`...).

pub mod colour;
pub mod scene;

pub use colour::{RgbColour, XyColour};
pub use scene::{ColourInfo, SceneInfo};
