pub mod animator;
pub mod canvas;
pub mod error;
pub mod runner;
pub mod subscription;

pub use animator::{Animator, CanvasSource};
pub use backdrop_engine::FieldConfig;
pub use canvas::Canvas2d;
pub use error::FieldError;
pub use runner::FieldRunner;
pub use subscription::EventSubscription;

/// Generate the `#[wasm_bindgen]` exports for a page background.
///
/// Generates:
/// - `thread_local!` storage for the [`Animator`]
/// - `backdrop_start(canvas_id)` using the given profile
/// - `backdrop_start_with_config(canvas_id, json)` using a JSON profile
/// - `backdrop_stop()` plus particle count, target and surface size accessors
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use backdrop_engine::FieldConfig;
///
/// backdrop_web::export_backdrop!(FieldConfig::connected(), "my-page");
/// ```
///
/// # Arguments
///
/// - `$config`: An expression producing the `FieldConfig` used by `backdrop_start`
/// - `$name`: A string literal used as a log prefix
#[macro_export]
macro_rules! export_backdrop {
    ($config:expr, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static ANIMATOR: RefCell<Option<$crate::Animator>> = RefCell::new(None);
        }

        fn init_logging() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }

        fn start_animator(canvas_id: &str, config: $crate::FieldConfig) {
            ANIMATOR.with(|cell| {
                // Drop the old animator first so its resize listener is gone
                // before the new one subscribes.
                cell.borrow_mut().take();

                let source = $crate::CanvasSource::Id(canvas_id.to_string());
                let mut animator = $crate::Animator::new(source, config);
                if let Err(e) = animator.start() {
                    log::error!("{}: {}", $name, e);
                }
                *cell.borrow_mut() = Some(animator);
            });
        }

        #[wasm_bindgen]
        pub fn backdrop_start(canvas_id: &str) {
            init_logging();
            start_animator(canvas_id, $config);
        }

        #[wasm_bindgen]
        pub fn backdrop_start_with_config(canvas_id: &str, json: &str) {
            init_logging();
            match $crate::FieldConfig::from_json(json) {
                Ok(config) => start_animator(canvas_id, config),
                Err(e) => log::error!("{}: {}", $name, e),
            }
        }

        #[wasm_bindgen]
        pub fn backdrop_stop() {
            ANIMATOR.with(|cell| {
                cell.borrow_mut().take();
            });
        }

        #[wasm_bindgen]
        pub fn backdrop_particle_count() -> u32 {
            ANIMATOR.with(|cell| {
                cell.borrow().as_ref().map_or(0, |a| a.particle_count() as u32)
            })
        }

        #[wasm_bindgen]
        pub fn backdrop_target() -> u32 {
            ANIMATOR.with(|cell| cell.borrow().as_ref().map_or(0, |a| a.target() as u32))
        }

        #[wasm_bindgen]
        pub fn backdrop_surface_width() -> f32 {
            ANIMATOR.with(|cell| cell.borrow().as_ref().map_or(0.0, |a| a.surface().width))
        }

        #[wasm_bindgen]
        pub fn backdrop_surface_height() -> f32 {
            ANIMATOR.with(|cell| cell.borrow().as_ref().map_or(0.0, |a| a.surface().height))
        }
    };
}
