//! Diagram view: emits the render command list for a fretboard.

use fretboard_protocol::{Dot, FretCoord, Point, RenderCommand, TextAlign, ThemeToken};

use crate::layout::DiagramState;

const LINE_WIDTH: f64 = 1.0;
// TODO: scale the font with the diagram height instead of fixing it.
const FONT_SIZE: f64 = 16.0;

/// Open-string markers sit outside the fretted region and render a
/// little smaller.
const OPEN_DOT_SCALE: f64 = 0.66;

/// Emit the full command list for a diagram: strings, frets, optional
/// fret numbers and label, then the configured dots.
pub fn render_diagram(state: &DiagramState) -> Vec<RenderCommand> {
    let mut commands =
        Vec::with_capacity(state.layout.string_count + state.opts.dots.len() + 16);

    draw_strings(&mut commands, state);
    draw_frets(&mut commands, state);

    if state.opts.show_fret_nums {
        draw_fret_nums(&mut commands, state);
    }
    if let Some(label) = &state.opts.label
        && !label.is_empty()
    {
        draw_label(&mut commands, state, label);
    }
    for dot in &state.opts.dots {
        commands.push(dot_command(state, dot));
    }

    commands
}

/// One vertical line per string, evenly spaced across the neck width.
fn draw_strings(commands: &mut Vec<RenderCommand>, state: &DiagramState) {
    let layout = &state.layout;
    for i in 0..layout.string_count {
        let x = i as f64 * layout.string_spacing + layout.x_margin;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, layout.y_margin),
            to: Point::new(x, layout.y_margin + layout.neck_height),
            color: ThemeToken::StringLine,
            width: LINE_WIDTH,
        });
    }
}

/// One horizontal line per fret boundary: `fret_count + 1` lines.
fn draw_frets(commands: &mut Vec<RenderCommand>, state: &DiagramState) {
    let layout = &state.layout;
    for i in 0..=layout.fret_count {
        let y = f64::from(i) * layout.fret_height + layout.y_margin;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(layout.x_margin, y),
            to: Point::new(state.opts.width - layout.x_margin, y),
            color: ThemeToken::FretLine,
            width: LINE_WIDTH,
        });
    }
}

/// A number left of the farthest string at each fret's vertical center.
fn draw_fret_nums(commands: &mut Vec<RenderCommand>, state: &DiagramState) {
    let layout = &state.layout;
    let last_string = layout.string_count as i32;

    for fret in state.opts.start_fret..=state.opts.end_fret {
        let point = layout.fret_coord_point(FretCoord::new(last_string, fret));
        commands.push(RenderCommand::DrawText {
            position: Point::new(
                point.x - layout.fret_num_offset,
                point.y + layout.fret_height / 4.0,
            ),
            text: fret.to_string(),
            color: ThemeToken::FretNumber,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
    }
}

/// Caption centered horizontally inside the top margin.
fn draw_label(commands: &mut Vec<RenderCommand>, state: &DiagramState, label: &str) {
    commands.push(RenderCommand::DrawText {
        position: Point::new(state.opts.width / 2.0, state.layout.y_margin / 2.0),
        text: label.to_string(),
        color: ThemeToken::Label,
        font_size: FONT_SIZE,
        align: TextAlign::Center,
    });
}

fn dot_command(state: &DiagramState, dot: &Dot) -> RenderCommand {
    let coord = dot.coord();
    let point = state.layout.fret_coord_point(coord);

    let scale = if coord.fret == 0 { OPEN_DOT_SCALE } else { 1.0 };
    let radius = state.layout.dot_radius * scale;
    let fill = dot
        .color
        .clone()
        .unwrap_or_else(|| state.opts.dot_color.clone());

    RenderCommand::DrawCircle {
        center: Point::new(point.x, point.y + radius / 2.0),
        radius,
        fill,
        stroke: ThemeToken::DotStroke,
        coord: Some(coord),
    }
}

/// Build the transient marker drawn under the pointer when hover
/// feedback is enabled.
pub fn hover_dot_command(state: &DiagramState, coord: FretCoord) -> RenderCommand {
    let dot = Dot {
        string: coord.string,
        fret: coord.fret,
        color: Some(state.opts.hover_dot_color.clone()),
    };
    dot_command(state, &dot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DiagramOptions;

    fn is_vertical(cmd: &RenderCommand) -> bool {
        matches!(cmd, RenderCommand::DrawLine { from, to, .. } if from.x == to.x)
    }

    fn is_horizontal(cmd: &RenderCommand) -> bool {
        matches!(cmd, RenderCommand::DrawLine { from, to, .. } if from.y == to.y)
    }

    #[test]
    fn line_counts_match_strings_and_frets() {
        let state = DiagramState::new(DiagramOptions::default());
        let commands = render_diagram(&state);
        assert_eq!(commands.iter().filter(|c| is_vertical(c)).count(), 6);
        assert_eq!(
            commands.iter().filter(|c| is_horizontal(c)).count(),
            (state.layout.fret_count + 1) as usize
        );
    }

    #[test]
    fn fret_numbers_cover_the_configured_range() {
        let state = DiagramState::new(DiagramOptions {
            show_fret_nums: true,
            start_fret: 3,
            end_fret: 7,
            ..Default::default()
        });
        let commands = render_diagram(&state);
        let texts: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["3", "4", "5", "6", "7"]);
    }

    #[test]
    fn label_is_centered_in_the_top_margin() {
        let state = DiagramState::new(DiagramOptions {
            label: Some("Am7".into()),
            ..Default::default()
        });
        let commands = render_diagram(&state);
        let label = commands.iter().find_map(|c| match c {
            RenderCommand::DrawText { position, text, .. } => Some((*position, text.clone())),
            _ => None,
        });
        let (position, text) = label.unwrap();
        assert_eq!(text, "Am7");
        assert_eq!(position.x, 100.0);
        assert_eq!(position.y, state.layout.y_margin / 2.0);
    }

    #[test]
    fn open_string_dots_shrink() {
        let state = DiagramState::new(DiagramOptions {
            dots: vec![
                Dot {
                    string: 1,
                    fret: 0,
                    color: None,
                },
                Dot {
                    string: 3,
                    fret: 2,
                    color: None,
                },
            ],
            ..Default::default()
        });
        let commands = render_diagram(&state);
        let radii: Vec<f64> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 2);
        assert!((radii[0] - state.layout.dot_radius * 0.66).abs() < 1e-9);
        assert!((radii[1] - state.layout.dot_radius).abs() < 1e-9);
    }

    #[test]
    fn dot_color_falls_back_to_the_default() {
        let state = DiagramState::new(DiagramOptions {
            dot_color: "black".into(),
            dots: vec![
                Dot {
                    string: 2,
                    fret: 1,
                    color: Some("red".into()),
                },
                Dot {
                    string: 4,
                    fret: 3,
                    color: None,
                },
            ],
            ..Default::default()
        });
        let commands = render_diagram(&state);
        let fills: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawCircle { fill, .. } => Some(fill.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, ["red", "black"]);
    }

    #[test]
    fn hover_dot_uses_the_hover_color() {
        let state = DiagramState::new(DiagramOptions {
            hover_dot_color: "lightgray".into(),
            ..Default::default()
        });
        let coord = FretCoord::new(3, 2);
        match hover_dot_command(&state, coord) {
            RenderCommand::DrawCircle {
                fill,
                coord: tagged,
                ..
            } => {
                assert_eq!(fill, "lightgray");
                assert_eq!(tagged, Some(coord));
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }
}
