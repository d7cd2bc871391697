pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{Attribute, RenderCommand, TextAlign};
pub use theme::ThemeToken;
pub use types::{Margin, Point, Rect};
