//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use duel_pong::renderer::CanvasRenderer;
    use duel_pong::{FieldConfig, GameLoop, Scheduler, SetupError};

    /// Game instance shared by the frame callback and the DOM listeners
    struct App {
        game: GameLoop,
        renderer: CanvasRenderer,
        document: Document,
    }

    impl App {
        /// Write the scores into the HUD
        fn update_hud(&self) {
            let scores = [
                ("score-left", self.game.score_left()),
                ("score-right", self.game.score_right()),
            ];
            for (id, score) in scores {
                if let Some(el) = self.document.get_element_by_id(id) {
                    el.set_text_content(Some(&score.to_string()));
                }
            }
        }
    }

    /// Delivers frames through `requestAnimationFrame`
    struct AnimationFrameScheduler {
        app: Rc<RefCell<App>>,
    }

    impl Scheduler for AnimationFrameScheduler {
        fn request_frame(&mut self) -> bool {
            let Some(window) = web_sys::window() else {
                log::error!("No window, cannot schedule frame");
                return false;
            };
            let app = self.app.clone();
            let closure = Closure::once(move |_time: f64| {
                on_frame(app);
            });
            if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
                return false;
            }
            closure.forget();
            true
        }
    }

    fn on_frame(app: Rc<RefCell<App>>) {
        let mut scheduler = AnimationFrameScheduler { app: app.clone() };
        let mut guard = app.borrow_mut();
        let App { game, renderer, .. } = &mut *guard;
        game.frame(renderer, &mut scheduler);
        guard.update_hud();
    }

    pub fn run() -> Result<(), SetupError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Duel Pong starting...");

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| SetupError::MissingElement("canvas".into()))?
            .dyn_into()
            .map_err(|_| SetupError::MissingElement("canvas".into()))?;

        // The canvas decides the field size
        let config = FieldConfig::with_field(canvas.width() as f32, canvas.height() as f32);
        config.validate()?;
        log::info!("Field {}x{}", config.width, config.height);

        let renderer = CanvasRenderer::new(&canvas)?;
        let app = Rc::new(RefCell::new(App {
            game: GameLoop::new(config),
            renderer,
            document: document.clone(),
        }));

        setup_keyboard(&window, app.clone());
        setup_reset_button(&document, app.clone());

        let mut scheduler = AnimationFrameScheduler { app: app.clone() };
        app.borrow_mut().game.start(&mut scheduler);
        app.borrow().update_hud();

        log::info!("Duel Pong running!");
        Ok(())
    }

    fn setup_keyboard(window: &Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let handled = app.borrow_mut().game.input_mut().key_down(&key);
                // Keep the arrows from scrolling the page
                if handled && key.starts_with("Arrow") {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(document: &Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("reset-btn") else {
            log::warn!("No #reset-btn element, reset is unavailable");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut scheduler = AnimationFrameScheduler { app: app.clone() };
            let mut guard = app.borrow_mut();
            guard.game.reset(&mut scheduler);
            guard.update_hud();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Duel Pong failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames in the native demo (30 seconds at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 30 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), duel_pong::ConfigError> {
    use duel_pong::FieldConfig;

    env_logger::init();
    log::info!("Duel Pong (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    let config = match std::env::var("DUEL_PONG_CONFIG") {
        Ok(path) => FieldConfig::load(path)?,
        Err(_) => FieldConfig::default(),
    };
    config.validate()?;

    run_demo(config);
    Ok(())
}

/// Play a scripted match on the virtual clock and log the result
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(config: duel_pong::FieldConfig) {
    use duel_pong::renderer::LogRenderer;
    use duel_pong::{FixedStepScheduler, GameLoop};

    // (frame, key, pressed)
    const SCRIPT: &[(u64, &str, bool)] = &[
        (0, "s", true),
        (20, "s", false),
        (30, "ArrowUp", true),
        (45, "ArrowUp", false),
        (200, "w", true),
        (230, "w", false),
        (400, "ArrowDown", true),
        (440, "ArrowDown", false),
    ];

    let mut game = GameLoop::new(config);
    let mut clock = FixedStepScheduler::default();
    let mut renderer = LogRenderer::new();

    game.start(&mut clock);
    for frame in 0..DEMO_FRAMES {
        for &(at, key, pressed) in SCRIPT {
            if at == frame {
                let input = game.input_mut();
                if pressed {
                    input.key_down(key);
                } else {
                    input.key_up(key);
                }
            }
        }
        if clock.step(&mut game, &mut renderer).is_none() {
            break;
        }
    }
    game.stop();

    log::info!(
        "Demo finished after {:.1}s virtual time ({} ticks): {} - {}",
        clock.now(),
        game.simulation().ticks,
        game.score_left(),
        game.score_right()
    );
}
