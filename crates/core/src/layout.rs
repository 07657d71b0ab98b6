use fretboard_protocol::{FretCoord, Point};
use serde::Serialize;

use crate::options::DiagramOptions;

/// Measurements derived once from `DiagramOptions` and never mutated.
///
/// Everything here is plain arithmetic on the option values; nothing is
/// rounded until a renderer produces its final coordinate strings.
/// Degenerate options (a single string, an inverted fret range) produce
/// non-finite values that propagate into the output unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub x_margin: f64,
    pub y_margin: f64,
    pub neck_width: f64,
    pub neck_height: f64,
    pub string_count: usize,
    pub string_spacing: f64,
    pub fret_count: i32,
    pub fret_height: f64,
    pub fret_num_offset: f64,
    pub dot_radius: f64,
}

impl Layout {
    pub fn from_options(opts: &DiagramOptions) -> Self {
        let x_margin = opts.width / 6.0;
        let y_margin_factor = if opts.has_label() { 1.5 } else { 1.0 };
        let y_margin = opts.height / 8.0 * y_margin_factor;

        let neck_width = opts.width - x_margin * 2.0;
        let neck_height = opts.height - y_margin * 2.0;

        let string_count = opts.string_count();
        let string_spacing = neck_width / (string_count as f64 - 1.0);

        // A nonzero start fret reserves one extra row for its own frets;
        // open-string mode (start fret 0) does not.
        let fret_count = (opts.end_fret - opts.start_fret) + i32::from(opts.start_fret != 0);

        let fret_height = neck_height / f64::from(fret_count);
        let fret_num_offset = neck_width / 6.0;
        let dot_radius = fret_height / 6.0;

        Self {
            x_margin,
            y_margin,
            neck_width,
            neck_height,
            string_count,
            string_spacing,
            fret_count,
            fret_height,
            fret_num_offset,
            dot_radius,
        }
    }

    /// Pixel position of a fretboard coordinate.
    ///
    /// The string index is mirrored so string 1 renders at the edge
    /// matching the caller's visual convention. Fretted positions shift
    /// up by an eighth of a fret so markers sit centered in their cell
    /// rather than on its boundary; open-string positions stay on the
    /// nut row.
    pub fn fret_coord_point(&self, coord: FretCoord) -> Point {
        let mirrored = self.string_count as i32 - coord.string;
        let x = f64::from(mirrored) * self.string_spacing + self.x_margin;

        let y_offset = if coord.fret == 0 {
            0.0
        } else {
            -self.fret_height / 8.0
        };
        let y =
            f64::from(coord.fret) * self.fret_height - self.fret_height / 2.0 + self.y_margin + y_offset;

        Point::new(x, y)
    }
}

/// Read-only composite of the options and the layout derived from them,
/// constructed once per diagram and passed by reference to every drawing
/// and mapping function.
///
/// Serializes as a single flat object, which is the shape interactive
/// frontends hand to click callbacks.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramState {
    #[serde(flatten)]
    pub opts: DiagramOptions,
    #[serde(flatten)]
    pub layout: Layout,
}

impl DiagramState {
    pub fn new(opts: DiagramOptions) -> Self {
        let layout = Layout::from_options(&opts);
        Self { opts, layout }
    }
}
