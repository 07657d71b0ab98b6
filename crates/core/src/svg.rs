//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use fretboard_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a command list as an SVG document string.
///
/// `width` and `height` define the viewBox dimensions; `class_name` is
/// set on the root element. Every child carries `pointer-events:none` so
/// that pointer events on the embedded document always resolve to the
/// container, never to a decorative line or label.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, class_name: &str) -> String {
    let mut svg = String::with_capacity(commands.len() * 120 + 200);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" class="{}">"#,
        escape_xml(class_name),
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}" style="pointer-events:none"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                stroke,
                ..
            } => {
                let stroke = resolve_color(*stroke);
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" stroke="{stroke}" fill="{}" style="pointer-events:none"/>"#,
                    center.x,
                    center.y,
                    escape_xml(fill),
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}" style="pointer-events:none">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::StringLine | ThemeToken::FretLine | ThemeToken::DotStroke => "black",
        ThemeToken::FretNumber | ThemeToken::Label => "black",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
