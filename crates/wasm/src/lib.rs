//! Browser rendering surface: builds the live SVG element for a fretboard
//! diagram and wires pointer interaction to it.

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use fretboard_core::{
    DiagramOptions, DiagramState, HoverTracker, closest_fret_coord, hover_dot_command,
    render_diagram,
};
use fretboard_protocol::{FretCoord, Point};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, SvgsvgElement};

/// Mutable per-surface state, touched only from event closures. The
/// browser serializes event dispatch, so a `RefCell` is all the
/// synchronization needed.
struct HoverState {
    tracker: HoverTracker,
    marker: Option<Element>,
}

type Listener = Closure<dyn FnMut(MouseEvent)>;

/// A live fretboard diagram: the `<svg>` element plus the event closures
/// and hover state bound to it.
///
/// The caller owns the handle. Dropping it drops the closures backing the
/// event handlers; there is no other teardown API.
#[wasm_bindgen]
pub struct FretboardDiagram {
    elem: SvgsvgElement,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl FretboardDiagram {
    /// The `<svg>` element, ready for insertion into the document.
    pub fn element(&self) -> SvgsvgElement {
        self.elem.clone()
    }
}

/// Build a diagram from a JSON options object (absent fields take the
/// documented defaults), optionally wiring a click callback invoked with
/// `(coord, element, state)`.
#[wasm_bindgen(js_name = makeFretboardDiagram)]
pub fn make_fretboard_diagram(
    opts_json: &str,
    on_click: Option<Function>,
) -> Result<FretboardDiagram, JsValue> {
    console_error_panic_hook::set_once();

    let opts = DiagramOptions::from_json(opts_json).map_err(|e| JsError::new(&e.to_string()))?;
    let state = Rc::new(DiagramState::new(opts));

    let elem = dom::make_svg_element(&state)?;
    for cmd in render_diagram(&state) {
        dom::append_command(&elem, &cmd)?;
    }

    let mut listeners = Vec::new();
    if let Some(on_click) = on_click {
        listeners.push(attach_click(&elem, &state, on_click)?);
    }
    if state.opts.show_hover_dot {
        let hover = Rc::new(RefCell::new(HoverState {
            tracker: HoverTracker::new(),
            marker: None,
        }));
        listeners.push(attach_pointer_move(&elem, &state, &hover)?);
        listeners.push(attach_pointer_leave(&elem, &hover)?);
    }

    Ok(FretboardDiagram {
        elem,
        _listeners: listeners,
    })
}

fn attach_click(
    elem: &SvgsvgElement,
    state: &Rc<DiagramState>,
    on_click: Function,
) -> Result<Listener, JsValue> {
    // The composite state ships to the callback as one flat JS object.
    let state_json =
        serde_json::to_string(state.as_ref()).map_err(|e| JsError::new(&e.to_string()))?;
    let state_js = js_sys::JSON::parse(&state_json)?;

    let elem_handle = elem.clone();
    let state = Rc::clone(state);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let coord = closest_fret_coord(&state, cursor_point(&elem_handle, &event));
        if let Err(err) = on_click.call3(
            &JsValue::NULL,
            &coord_to_js(coord),
            elem_handle.as_ref(),
            &state_js,
        ) {
            wasm_bindgen::throw_val(err);
        }
    });
    elem.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn attach_pointer_move(
    elem: &SvgsvgElement,
    state: &Rc<DiagramState>,
    hover: &Rc<RefCell<HoverState>>,
) -> Result<Listener, JsValue> {
    let elem_handle = elem.clone();
    let state = Rc::clone(state);
    let hover = Rc::clone(hover);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let coord = closest_fret_coord(&state, cursor_point(&elem_handle, &event));
        let mut hover = hover.borrow_mut();
        if !hover.tracker.pointer_move(coord) {
            return;
        }
        if let Some(marker) = hover.marker.take() {
            marker.remove();
        }
        if let Ok(marker) = dom::append_command(&elem_handle, &hover_dot_command(&state, coord)) {
            hover.marker = Some(marker);
        }
    });
    elem.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn attach_pointer_leave(
    elem: &SvgsvgElement,
    hover: &Rc<RefCell<HoverState>>,
) -> Result<Listener, JsValue> {
    let hover = Rc::clone(hover);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        let mut hover = hover.borrow_mut();
        hover.tracker.pointer_leave();
        if let Some(marker) = hover.marker.take() {
            marker.remove();
        }
    });
    elem.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

/// Invert the pointer's screen position into the drawing's local
/// coordinate space through the element's screen CTM, accounting for any
/// scaling or transform between the two.
///
/// Throws (aborting the calling event handler) when the transform is
/// unavailable; there is no recovery path.
fn cursor_point(elem: &SvgsvgElement, event: &MouseEvent) -> Point {
    let point = elem.create_svg_point();
    point.set_x(event.client_x() as f32);
    point.set_y(event.client_y() as f32);

    let Some(ctm) = elem.get_screen_ctm() else {
        wasm_bindgen::throw_str("could not get the screen ctm of the diagram element");
    };
    let inverse = match ctm.inverse() {
        Ok(matrix) => matrix,
        Err(err) => wasm_bindgen::throw_val(err),
    };
    let local = point.matrix_transform(&inverse);
    Point::new(f64::from(local.x()), f64::from(local.y()))
}

fn coord_to_js(coord: FretCoord) -> JsValue {
    let obj = Object::new();
    let _ = Reflect::set(
        &obj,
        &JsValue::from_str("string"),
        &JsValue::from(coord.string),
    );
    let _ = Reflect::set(&obj, &JsValue::from_str("fret"), &JsValue::from(coord.fret));
    obj.into()
}
