use fretboard_protocol::{FretCoord, Point};

use crate::layout::DiagramState;

/// Map a point in the diagram's local coordinate space to the nearest
/// fretboard coordinate.
///
/// The result is always in range: the string is clamped to
/// `[1, string_count]` and the fret to `[start_fret, end_fret]`, so
/// pointer positions outside the neck (or outside the drawing entirely)
/// still resolve to a valid cell. Callers are expected to have already
/// inverted any screen-to-local transform.
pub fn closest_fret_coord(state: &DiagramState, point: Point) -> FretCoord {
    let layout = &state.layout;
    let x = point.x - layout.x_margin;
    let y = point.y - layout.y_margin + layout.fret_height / 2.0;

    let column = (x / layout.string_spacing).round() as i32;
    let string = clamp(
        layout.string_count as i32 - column,
        1,
        layout.string_count as i32,
    );

    let row = (y / layout.fret_height).round() as i32;
    let fret = clamp(row, state.opts.start_fret, state.opts.end_fret);

    FretCoord::new(string, fret)
}

// Tolerates an inverted range (lo > hi) instead of panicking: degenerate
// options are passed through, not validated.
fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DiagramOptions;

    #[test]
    fn round_trips_every_cell() {
        let state = DiagramState::new(DiagramOptions::default());
        for string in 1..=6 {
            for fret in 0..=4 {
                let coord = FretCoord::new(string, fret);
                let point = state.layout.fret_coord_point(coord);
                assert_eq!(closest_fret_coord(&state, point), coord);
            }
        }
    }

    #[test]
    fn round_trips_with_nonzero_start_fret() {
        let state = DiagramState::new(DiagramOptions {
            start_fret: 3,
            end_fret: 7,
            ..Default::default()
        });
        for string in 1..=6 {
            for fret in 3..=7 {
                let coord = FretCoord::new(string, fret);
                let point = state.layout.fret_coord_point(coord);
                assert_eq!(closest_fret_coord(&state, point), coord);
            }
        }
    }

    #[test]
    fn far_outside_points_clamp_into_range() {
        let state = DiagramState::new(DiagramOptions::default());

        let coord = closest_fret_coord(&state, Point::new(-1e4, -1e4));
        assert_eq!(coord, FretCoord::new(6, 0));

        let coord = closest_fret_coord(&state, Point::new(1e4, 1e4));
        assert_eq!(coord, FretCoord::new(1, 4));
    }

    #[test]
    fn same_point_picks_the_same_cell() {
        let state = DiagramState::new(DiagramOptions::default());
        let point = Point::new(57.0, 141.0);
        assert_eq!(
            closest_fret_coord(&state, point),
            closest_fret_coord(&state, point)
        );
    }
}
