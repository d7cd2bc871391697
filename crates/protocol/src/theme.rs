use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,

    TextPrimary,
    TextSecondary,

    AxisLine,
    AxisText,

    LegendText,

    /// Entry `n` of the categorical palette (wraps around).
    Category(u8),
}
