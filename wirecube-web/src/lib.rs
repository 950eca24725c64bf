/// Wirecube Web - browser frontend over a 2D canvas
///
/// The page supplies three range sliders as the angle source, a canvas as
/// the drawing surface, and three spans as the degree readouts. Every
/// slider `input` event triggers one synchronous full re-render; one more
/// render runs at startup with the sliders' initial values.
///
/// Expected element ids: `projectionCanvas`, `rotationX`/`rotationY`/
/// `rotationZ` (inputs), `rotationXValue`/`rotationYValue`/`rotationZValue`
/// (readout spans).

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use nalgebra::Point2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlInputElement,
};
use wirecube_core::{Angles, Axis, DrawSurface, ReadoutSink, Scene, Viewport, Wireframe};

const EDGE_STYLE: &str = "#007bff";
const MARKER_STYLE: &str = "red";
const EDGE_WIDTH: f64 = 2.0;

/// 2D canvas context implementing the core drawing interface
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_stroke_style_str(EDGE_STYLE);
        ctx.set_fill_style_str(MARKER_STYLE);
        ctx.set_line_width(EDGE_WIDTH);
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_disc(&mut self, center: Point2<f32>, radius: f32) {
        self.ctx.begin_path();
        // arc only fails for a negative radius
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .unwrap_throw();
        self.ctx.fill();
    }
}

/// Writes the degree readouts into the page's spans
struct SpanReadouts {
    x: HtmlElement,
    y: HtmlElement,
    z: HtmlElement,
}

impl ReadoutSink for SpanReadouts {
    fn write_readout(&mut self, axis: Axis, text: &str) {
        let target = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        };
        target.set_text_content(Some(text));
    }
}

/// Parse a slider value as finite degrees. `None` means the input is
/// unusable and the frame should fall back to the last good angles.
fn parse_degrees(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

struct App {
    scene: Scene,
    surface: CanvasSurface,
    readouts: SpanReadouts,
    sliders: [HtmlInputElement; 3],
    last_good: Angles,
}

impl App {
    /// Read the sliders, falling back per frame to the last-known-good
    /// angles when a value does not parse.
    fn current_angles(&self) -> Option<Angles> {
        let x = parse_degrees(&self.sliders[0].value())?;
        let y = parse_degrees(&self.sliders[1].value())?;
        let z = parse_degrees(&self.sliders[2].value())?;
        Some(Angles::from_degrees(x, y, z))
    }

    fn render_frame(&mut self) {
        let angles = self.current_angles().unwrap_or(self.last_good);
        if self
            .scene
            .render(&angles, &mut self.surface, &mut self.readouts)
        {
            self.last_good = angles;
        }
    }
}

/// Browser application: wires the sliders to the render pipeline.
#[wasm_bindgen]
pub struct WebApp {
    inner: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl WebApp {
    /// Look up the page elements, render the initial frame, and attach
    /// an `input` listener per slider.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebApp, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = lookup(&document, "projectionCanvas")?;
        let surface = CanvasSurface::new(&canvas)?;
        let viewport = Viewport::new(canvas.width(), canvas.height());

        let sliders = [
            lookup::<HtmlInputElement>(&document, "rotationX")?,
            lookup::<HtmlInputElement>(&document, "rotationY")?,
            lookup::<HtmlInputElement>(&document, "rotationZ")?,
        ];
        let readouts = SpanReadouts {
            x: lookup(&document, "rotationXValue")?,
            y: lookup(&document, "rotationYValue")?,
            z: lookup(&document, "rotationZValue")?,
        };

        let inner = Rc::new(RefCell::new(App {
            scene: Scene::new(Wireframe::cube(), viewport),
            surface,
            readouts,
            sliders,
            last_good: Angles::zero(),
        }));

        inner.borrow_mut().render_frame();

        for slider in &inner.borrow().sliders {
            let app = Rc::clone(&inner);
            let callback = Closure::wrap(Box::new(move || {
                app.borrow_mut().render_frame();
            }) as Box<dyn FnMut()>);
            slider
                .add_event_listener_with_callback("input", callback.as_ref().unchecked_ref())?;
            // Listeners live as long as the page
            callback.forget();
        }

        Ok(WebApp { inner })
    }

    /// Force a re-render at the current slider values
    pub fn render(&self) {
        self.inner.borrow_mut().render_frame();
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has the wrong type", id)))
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // The module script loads after the DOM, so the elements exist
    WebApp::new().map(|_| ())
}
