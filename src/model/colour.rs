//! Colour value types: RGB components and CIE 1931 chromaticity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A colour in RGB colour space.
///
/// Components are not range-checked. Consumers use either 0.0-1.0 or 0-255
/// depending on the device they drive.
///
/// # Examples
///
/// ```
/// use lightscene::RgbColour;
/// let amber = RgbColour::new(1.0, 0.5, 0.0);
/// assert_eq!(serde_json::to_string(&amber).unwrap(), r#"{"r":1.0,"g":0.5,"b":0.0}"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RgbColour {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl RgbColour {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<[f64; 3]> for RgbColour {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A colour in CIE 1931 XY chromaticity space (brightness independent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct XyColour {
    /// x chromaticity coordinate
    pub x: f64,
    /// y chromaticity coordinate
    pub y: f64,
}

impl XyColour {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for XyColour {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for XyColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xy({}, {})", self.x, self.y)
    }
}
