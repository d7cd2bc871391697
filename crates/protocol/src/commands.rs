use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the chart. Renderers consume
/// this list sequentially; each command carries all the data it needs,
/// and transform/group commands nest until their matching pop/end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle.
    DrawRect { rect: Rect, color: ThemeToken },

    /// Draw a filled circle. `datum` links the circle back to the record
    /// it represents (for hit-testing / hover).
    DrawCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        class: Option<String>,
        attributes: Vec<Attribute>,
        label: Option<String>,
        datum: Option<usize>,
    },

    /// Draw a text string at a position. `rotation` is in degrees and is
    /// applied around the local origin before `position`.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
        rotation: f64,
        id: Option<String>,
        class: Option<String>,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Push a translation (applied to all subsequent commands until the
    /// matching `PopTransform`).
    PushTransform { translate: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (an axis, the legend, one tick).
    BeginGroup {
        id: Option<String>,
        class: Option<String>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// An extra named attribute exposed on a rendered element for external
/// inspection, e.g. `data-xvalue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RenderCommand {
    /// Whether this command is a circle tagged with the given class.
    pub fn is_circle_of_class(&self, wanted: &str) -> bool {
        matches!(self, Self::DrawCircle { class: Some(c), .. } if c == wanted)
    }

    /// Looks up an attribute on a circle command.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::DrawCircle { attributes, .. } => attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }
}
