use serde::{Deserialize, Serialize};

/// Pixel position in the diagram's local coordinate space, relative to
/// the top left of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A string and fret on the fretboard.
///
/// `string` is 1-indexed; fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretCoord {
    pub string: i32,
    pub fret: i32,
}

impl FretCoord {
    pub fn new(string: i32, fret: i32) -> Self {
        Self { string, fret }
    }
}

/// A marker drawn at a fretboard position, with an optional fill color
/// overriding the diagram's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub string: i32,
    pub fret: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Dot {
    pub fn coord(&self) -> FretCoord {
        FretCoord::new(self.string, self.fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn dot_without_color() {
        let dot: Dot = serde_json::from_str(r#"{"string": 1, "fret": 0}"#).unwrap();
        assert_eq!(dot.coord(), FretCoord::new(1, 0));
        assert_eq!(dot.color, None);
    }
}
