//! Browser lifecycle for a particle field: canvas sizing, the
//! `requestAnimationFrame` loop, and the window resize subscription.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use backdrop_engine::{FieldConfig, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::canvas::Canvas2d;
use crate::error::FieldError;
use crate::runner::FieldRunner;
use crate::subscription::EventSubscription;

/// Where the animator finds its canvas on each (re)initialization.
#[derive(Debug, Clone)]
pub enum CanvasSource {
    /// Look the element up by id in the current document.
    Id(String),
    /// A canvas the embedder already holds.
    Element(HtmlCanvasElement),
}

impl CanvasSource {
    fn resolve(&self) -> Result<HtmlCanvasElement, FieldError> {
        match self {
            CanvasSource::Id(id) => web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
                .ok_or(FieldError::SurfaceNotReady),
            CanvasSource::Element(canvas) if canvas.is_connected() => Ok(canvas.clone()),
            CanvasSource::Element(_) => Err(FieldError::SurfaceNotReady),
        }
    }
}

/// State shared between the animator and its browser callbacks.
/// Callbacks only hold a `Weak`, so dropping the animator frees it.
struct Shared {
    source: CanvasSource,
    runner: RefCell<FieldRunner>,
    surface: RefCell<Option<Canvas2d>>,
    frame_id: Cell<Option<i32>>,
    on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    /// Measure the canvas, match its backing store to the layout box, resize
    /// the field and restart the frame loop.
    fn initialize(&self) -> Result<usize, FieldError> {
        let canvas = self.source.resolve()?;
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width(rect.width() as u32);
        canvas.set_height(rect.height() as u32);

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        log::debug!("surface {}x{}", width, height);

        let surface = Canvas2d::from_canvas(&canvas)?;
        let (count, summary) = {
            let mut runner = self.runner.borrow_mut();
            runner.resize(width, height);
            (runner.particle_count(), runner.summary())
        };
        *self.surface.borrow_mut() = Some(surface);

        self.cancel_frame();
        self.request_frame()?;
        log::info!("Animation started with {}.", summary);
        Ok(count)
    }

    fn frame(&self) {
        self.frame_id.set(None);
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            self.runner.borrow_mut().frame(surface);
        }
        if let Err(e) = self.request_frame() {
            log::error!("could not schedule next frame: {}", e);
        }
    }

    fn request_frame(&self) -> Result<(), FieldError> {
        let on_frame = self.on_frame.borrow();
        // stopped: no callback to schedule
        let Some(callback) = on_frame.as_ref() else {
            return Ok(());
        };
        let window = web_sys::window().ok_or_else(|| FieldError::Js("no global window".into()))?;
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.frame_id.set(Some(id));
        Ok(())
    }

    fn cancel_frame(&self) {
        let Some(id) = self.frame_id.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Animated particle background bound to one canvas.
///
/// `start` sizes the canvas, spawns the population, begins the frame loop and
/// subscribes to window resizes; `stop` (or dropping the animator) cancels the
/// pending frame and removes the resize listener.
pub struct Animator {
    shared: Rc<Shared>,
    resize: Option<EventSubscription>,
}

impl Animator {
    pub fn new(source: CanvasSource, config: FieldConfig) -> Self {
        Self::with_seed(source, config, random_seed())
    }

    pub fn with_seed(source: CanvasSource, config: FieldConfig, seed: u64) -> Self {
        Self {
            shared: Rc::new(Shared {
                source,
                runner: RefCell::new(FieldRunner::new(config, seed)),
                surface: RefCell::new(None),
                frame_id: Cell::new(None),
                on_frame: RefCell::new(None),
            }),
            resize: None,
        }
    }

    /// Start (or restart) the animation. Returns the particle count.
    ///
    /// The resize listener is installed even if the canvas is not ready yet,
    /// so a later resize can still bring the animation up.
    pub fn start(&mut self) -> Result<usize, FieldError> {
        if self.shared.on_frame.borrow().is_none() {
            let weak = Rc::downgrade(&self.shared);
            let callback = Closure::wrap(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.frame();
                }
            }) as Box<dyn FnMut()>);
            *self.shared.on_frame.borrow_mut() = Some(callback);
        }

        if self.resize.is_none() {
            self.resize = Some(self.subscribe_resize()?);
        }

        self.shared.initialize()
    }

    fn subscribe_resize(&self) -> Result<EventSubscription, FieldError> {
        let window = web_sys::window().ok_or_else(|| FieldError::Js("no global window".into()))?;
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                if let Err(e) = shared.initialize() {
                    log::error!("{}", e);
                }
            }
        }) as Box<dyn FnMut()>);
        EventSubscription::listen(&window, "resize", callback)
    }

    /// Cancel the pending frame and release the resize listener.
    pub fn stop(&mut self) {
        let was_running = self.is_running();
        if let Some(sub) = self.resize.take() {
            log::debug!("removing '{}' listener", sub.event());
        }
        self.shared.cancel_frame();
        self.shared.on_frame.borrow_mut().take();
        if was_running {
            log::info!("Animation stopped after {} frames.", self.frames());
        }
    }

    /// Whether a frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.shared.frame_id.get().is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.shared.runner.borrow().particle_count()
    }

    pub fn target(&self) -> usize {
        self.shared.runner.borrow().target()
    }

    /// Canvas size the field was last sized to.
    pub fn surface(&self) -> Surface {
        self.shared.runner.borrow().surface()
    }

    pub fn frames(&self) -> u64 {
        self.shared.runner.borrow().frames()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
