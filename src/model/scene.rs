//! Named colour settings and the scenes that group them.

use super::colour::{RgbColour, XyColour};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Information about a single colour setting.
///
/// Carries the same colour in both XY and RGB form so consumers can drive
/// whichever space their lights understand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColourInfo {
    /// Colour in XY colour space
    pub xy: XyColour,

    /// Colour in RGB colour space
    pub rgb: RgbColour,

    /// Brightness as a percentage (0-100 by convention, not enforced)
    pub brightness: f64,

    /// Display name, empty when unnamed
    #[serde(default)]
    pub name: String,
}

impl ColourInfo {
    pub fn new(
        name: impl Into<String>,
        xy: impl Into<XyColour>,
        rgb: impl Into<RgbColour>,
        brightness: f64,
    ) -> Self {
        Self {
            xy: xy.into(),
            rgb: rgb.into(),
            brightness,
            name: name.into(),
        }
    }
}

impl fmt::Display for ColourInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(unnamed)"
        } else {
            self.name.as_str()
        };
        write!(
            f,
            "{} brightness={} {} {}",
            name, self.brightness, self.xy, self.rgb
        )
    }
}

/// A named, ordered collection of colour settings applied together.
///
/// The order of `colours` is significant and preserved through
/// serialisation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Colours in display/apply order
    #[serde(default)]
    pub colours: Vec<ColourInfo>,
}

impl SceneInfo {
    /// Creates a scene with no colours.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            colours: Vec::new(),
        }
    }

    /// Appends a colour, builder style.
    pub fn with_colour(mut self, colour: ColourInfo) -> Self {
        self.colours.push(colour);
        self
    }

    pub fn push_colour(&mut self, colour: ColourInfo) {
        self.colours.push(colour);
    }

    /// Returns the first colour whose name matches exactly.
    pub fn colour(&self, name: &str) -> Option<&ColourInfo> {
        self.colours.iter().find(|colour| colour.name == name)
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl fmt::Display for SceneInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(unnamed scene)"
        } else {
            self.name.as_str()
        };
        write!(f, "{} ({} colours)", name, self.colours.len())?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}
