use crate::constants::CANVAS_ID;
use crate::dom;
use folio_core::{ParticleField, Surface};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` over a 2D canvas context.
pub struct CanvasSurface<'a>(pub &'a web::CanvasRenderingContext2d);

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        let ctx = self.0;
        ctx.begin_path();
        _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(color));
        ctx.fill();
    }
}

pub struct ParticleScene {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: ParticleField,
}

impl ParticleScene {
    pub fn frame(&mut self) {
        self.field.render_frame(&mut CanvasSurface(&self.ctx));
    }

    /// Resize the canvas to the viewport and regenerate every particle.
    pub fn reset_to_viewport(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.initialize(w, h);
    }
}

/// Handle to a running requestAnimationFrame loop. Once stopped the loop is
/// gone; start a new one to resume.
pub struct FrameLoop {
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

pub fn start_loop(scene: Rc<RefCell<ParticleScene>>) -> FrameLoop {
    let stopped = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let stopped_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped_tick.get() {
            return;
        }
        scene.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    FrameLoop { stopped }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn wire_canvas_resize(scene: &Rc<RefCell<ParticleScene>>) {
    let Some(window) = web::window() else {
        return;
    };
    let scene = scene.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let mut s = scene.borrow_mut();
        s.reset_to_viewport();
        log::debug!("[particles] resized, {} particles", s.field.len());
    });
}

pub fn wire_particles(document: &web::Document, seed: u64) -> anyhow::Result<FrameLoop> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{}", CANVAS_ID))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let scene = Rc::new(RefCell::new(ParticleScene {
        canvas,
        ctx,
        field: ParticleField::new(seed),
    }));
    scene.borrow_mut().reset_to_viewport();
    log::info!("[particles] {} particles", scene.borrow().field.len());

    wire_canvas_resize(&scene);
    Ok(start_loop(scene))
}
