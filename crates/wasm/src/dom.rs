//! DOM construction: render commands to namespaced SVG elements.

use fretboard_core::DiagramState;
use fretboard_protocol::{RenderCommand, TextAlign, ThemeToken};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, SvgsvgElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document in this environment"))
}

/// Create the root `<svg>` container described by the state.
pub(crate) fn make_svg_element(state: &DiagramState) -> Result<SvgsvgElement, JsValue> {
    let doc = document()?;
    let elem = doc.create_element_ns(Some(SVG_NS), "svg")?;
    elem.set_attribute("width", &state.opts.width.to_string())?;
    elem.set_attribute("height", &state.opts.height.to_string())?;
    elem.set_attribute(
        "viewBox",
        &format!("0 0 {} {}", state.opts.width, state.opts.height),
    )?;
    elem.set_attribute("class", &state.opts.class_name)?;
    elem.dyn_into::<SvgsvgElement>()
        .map_err(|_| JsValue::from_str("created element is not an <svg>"))
}

/// Append one command as a child element and return it.
///
/// Children never receive pointer events; hits always land on the
/// container.
pub(crate) fn append_command(parent: &Element, cmd: &RenderCommand) -> Result<Element, JsValue> {
    let doc = document()?;
    let child = match cmd {
        RenderCommand::DrawLine {
            from,
            to,
            color,
            width,
        } => {
            let line = doc.create_element_ns(Some(SVG_NS), "line")?;
            line.set_attribute("x1", &from.x.to_string())?;
            line.set_attribute("y1", &from.y.to_string())?;
            line.set_attribute("x2", &to.x.to_string())?;
            line.set_attribute("y2", &to.y.to_string())?;
            line.set_attribute("stroke", resolve_color(*color))?;
            line.set_attribute("stroke-width", &width.to_string())?;
            line
        }
        RenderCommand::DrawCircle {
            center,
            radius,
            fill,
            stroke,
            ..
        } => {
            let circle = doc.create_element_ns(Some(SVG_NS), "circle")?;
            circle.set_attribute("cx", &center.x.to_string())?;
            circle.set_attribute("cy", &center.y.to_string())?;
            circle.set_attribute("r", &radius.to_string())?;
            circle.set_attribute("stroke", resolve_color(*stroke))?;
            circle.set_attribute("fill", fill)?;
            circle
        }
        RenderCommand::DrawText {
            position,
            text,
            color,
            font_size,
            align,
        } => {
            let elem = doc.create_element_ns(Some(SVG_NS), "text")?;
            elem.set_attribute("x", &position.x.to_string())?;
            elem.set_attribute("y", &position.y.to_string())?;
            elem.set_attribute("fill", resolve_color(*color))?;
            elem.set_attribute("font-size", &font_size.to_string())?;
            let anchor = match align {
                TextAlign::Left => "start",
                TextAlign::Center => "middle",
                TextAlign::Right => "end",
            };
            elem.set_attribute("text-anchor", anchor)?;
            elem.append_child(&doc.create_text_node(text))?;
            elem
        }
    };
    child.set_attribute("style", "pointer-events:none")?;
    parent.append_child(&child)?;
    Ok(child)
}

fn resolve_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::StringLine | ThemeToken::FretLine | ThemeToken::DotStroke => "black",
        ThemeToken::FretNumber | ThemeToken::Label => "black",
    }
}
