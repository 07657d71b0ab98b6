use fretboard_protocol::Dot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete diagram configuration.
///
/// Deserializes with `#[serde(default)]`, so a partial JSON object
/// overlays these defaults field by field. The click callback is not part
/// of the options — interactive frontends take it separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramOptions {
    /// CSS class set on the produced container.
    pub class_name: String,
    /// Pixel width of the container.
    pub width: f64,
    /// Pixel height of the container.
    pub height: f64,
    /// First fret drawn. 0 shows open strings.
    pub start_fret: i32,
    /// Last fret drawn.
    pub end_fret: i32,
    /// Draw fret numbers left of the neck.
    pub show_fret_nums: bool,
    /// Ordered string labels; the length defines the string count.
    pub string_names: Vec<String>,
    /// Accepted and retained, but not yet rendered.
    pub show_string_names: bool,
    /// Markers to draw.
    pub dots: Vec<Dot>,
    /// Default marker fill.
    pub dot_color: String,
    /// Draw a transient marker under the pointer.
    #[serde(alias = "drawDotOnHover")]
    pub show_hover_dot: bool,
    /// Fill for the hover marker.
    pub hover_dot_color: String,
    /// Caption centered above the neck.
    pub label: Option<String>,
}

impl Default for DiagramOptions {
    /// A 6-string guitar in standard tuning, frets 0–4.
    fn default() -> Self {
        Self {
            class_name: "fretboard-diagram".into(),
            width: 200.0,
            height: 300.0,
            start_fret: 0,
            end_fret: 4,
            show_fret_nums: false,
            string_names: ["E", "B", "G", "D", "A", "E"]
                .into_iter()
                .map(String::from)
                .collect(),
            show_string_names: false,
            dots: Vec::new(),
            dot_color: "white".into(),
            show_hover_dot: false,
            hover_dot_color: "white".into(),
            label: None,
        }
    }
}

impl DiagramOptions {
    /// Parse options from a JSON object, overlaying the defaults.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn string_count(&self) -> usize {
        self.string_names.len()
    }

    pub(crate) fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }
}
