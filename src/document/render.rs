use super::{DocumentError, SceneDocument};
use crate::model::SceneInfo;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// JSON layout used when rendering documents back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single line, no insignificant whitespace.
    Compact,
    /// One field per line, indented by `indent` spaces per level.
    Pretty { indent: usize },
}

impl Default for OutputStyle {
    fn default() -> Self {
        OutputStyle::Pretty { indent: 2 }
    }
}

/// Renders a document in the shape it was read: object for a single scene,
/// array for a collection.
pub fn render_document(
    document: &SceneDocument,
    style: OutputStyle,
) -> Result<String, DocumentError> {
    render(document, style)
}

pub fn render_scene(scene: &SceneInfo, style: OutputStyle) -> Result<String, DocumentError> {
    render(scene, style)
}

fn render<T: Serialize + ?Sized>(value: &T, style: OutputStyle) -> Result<String, DocumentError> {
    match style {
        OutputStyle::Compact => Ok(serde_json::to_string(value)?),
        OutputStyle::Pretty { indent } => {
            let indent = vec![b' '; indent];
            let mut out = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
            value.serialize(&mut serializer)?;
            Ok(String::from_utf8_lossy(&out).into_owned())
        }
    }
}
