use serde::{Deserialize, Serialize};

/// Semantic color tokens for the diagram's structural elements, resolved
/// by each renderer. Dot fills are caller-supplied CSS colors and bypass
/// the theme entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    StringLine,
    FretLine,
    DotStroke,
    FretNumber,
    Label,
}
