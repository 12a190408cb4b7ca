//! Colour and lighting scene records with their JSON wire format.
//!
//! The [`model`] types are plain values shared with the lighting notebooks.
//! [`document`] reads and renders files holding one scene or a list of scenes,
//! and [`config`] carries the settings used by the `lightscene` binary.

pub mod config;
pub mod document;
pub mod model;

pub use config::Config;
pub use document::{DocumentError, SceneDocument};
pub use model::{ColourInfo, RgbColour, SceneInfo, XyColour};
