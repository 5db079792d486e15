//! Planet Defender entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use glam::Vec2;
    use planet_defender::consts::{MAX_SUBSTEPS, SIM_DT};
    use planet_defender::settings::Settings;
    use planet_defender::sim::{GameEvent, GameState, TickInput, tick};
    use planet_defender::view::DomView;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        view: DomView,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        events: Vec<GameEvent>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, view: DomView) -> Self {
            Self {
                state: GameState::new(seed, settings),
                view,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                events: Vec::new(),
            }
        }

        /// Run simulation ticks for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT, &mut self.events);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.fire = None;
            }
        }

        /// Push this frame's events and rotations to the DOM
        fn render(&mut self) {
            if let Err(e) = self.view.apply(&self.state, &self.events) {
                log::warn!("view error: {e:?}");
            }
            self.events.clear();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Planet Defender starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let viewport_w = window
            .inner_width()?
            .as_f64()
            .unwrap_or(f64::from(Settings::default().viewport_w)) as f32;
        let viewport_h = window
            .inner_height()?
            .as_f64()
            .unwrap_or(f64::from(Settings::default().viewport_h)) as f32;
        let settings = Settings::load().with_viewport(viewport_w, viewport_h);

        let seed = js_sys::Date::now() as u64;
        let view = DomView::new(document.clone())?;
        let game = Rc::new(RefCell::new(Game::new(seed, settings, view)));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Planet Defender running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Pointer move - aim the reticle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.aim =
                    Some(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - fire a projectile at the click point
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.fire =
                    Some(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            });
            let _ =
                window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Planet Defender (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the sim for up to two minutes with a scripted gunner, logging the
/// outcome. Exercises the full spawn/fire/detect loop without a browser.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use glam::Vec2;
    use planet_defender::consts::{DEFENDER_ANCHOR, SIM_DT};
    use planet_defender::settings::Settings;
    use planet_defender::sim::{GameEvent, GameState, TickInput, tick};
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut state = GameState::new(seed, Settings::default());
    let mut events = Vec::new();

    let max_ticks = 120 * 120; // two minutes at 120 Hz
    for n in 0..max_ticks {
        // Fire every two seconds, sweeping the aim around the defender
        let input = if n % 240 == 0 {
            let theta = n as f32 / 240.0;
            TickInput {
                fire: Some(DEFENDER_ANCHOR + 400.0 * Vec2::new(theta.cos(), theta.sin())),
                ..Default::default()
            }
        } else {
            TickInput::default()
        };

        tick(&mut state, &input, SIM_DT, &mut events);

        for event in events.drain(..) {
            if let GameEvent::Defeat { score } = event {
                log::info!("defeated after {:.1}s, final score {score}", state.time_ms / 1000.0);
                return;
            }
        }
    }

    log::info!(
        "survived two minutes: score {}, {} obstacles live, {} projectiles live",
        state.score,
        state.obstacles.len(),
        state.projectiles.len()
    );
}
