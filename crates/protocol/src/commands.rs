use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{FretCoord, Point};

/// A single, stateless render instruction.
///
/// The diagram view emits a `Vec<RenderCommand>` for each draw. Renderers
/// consume the list sequentially — each command carries all the data it
/// needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw a filled circle, optionally tagged with the fretboard cell it
    /// marks (for hit-testing / selection by consumers).
    DrawCircle {
        center: Point,
        radius: f64,
        /// CSS fill color, caller-supplied.
        fill: String,
        stroke: ThemeToken,
        coord: Option<FretCoord>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_round_trips_through_json() {
        let cmd = RenderCommand::DrawCircle {
            center: Point::new(100.0, 65.625),
            radius: 9.375,
            fill: "white".into(),
            stroke: ThemeToken::DotStroke,
            coord: Some(FretCoord::new(3, 2)),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: RenderCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
