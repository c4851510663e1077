//! Endless Sprint entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use endless_sprint::consts::{DESIGN_HEIGHT, DESIGN_WIDTH};
    use endless_sprint::renderer::RenderState;
    use endless_sprint::sim::{Direction, InputEvent};
    use endless_sprint::viewport::display_scale;
    use endless_sprint::{Game, HudReadout, Tuning};

    /// Browser-side game instance
    struct WebGame {
        game: Game,
        render_state: Option<RenderState>,
    }

    impl WebGame {
        /// Tick, draw and refresh the HUD. Without a GPU the sim and HUD keep running.
        fn frame(&mut self, time: f64) {
            match self.render_state {
                Some(ref mut render_state) => match self.game.on_frame(render_state, time) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                },
                None => self.game.step(),
            }
            update_hud(&self.game.hud());
        }
    }

    /// Tuning override from `<script id="game-tuning" type="application/json">`
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("game-tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };

        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning override: {}", e);
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Endless Sprint starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store matches the CSS size times device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width().max(DESIGN_WIDTH as i32) as f64 * dpr) as u32;
        let height = (canvas.client_height().max(DESIGN_HEIGHT as i32) as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = load_tuning(&document);
        let design = glam::Vec2::new(tuning.viewport_width, tuning.viewport_height);
        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(tuning, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start game: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let web_game = Rc::new(RefCell::new(WebGame {
            game,
            render_state: None,
        }));

        // Initialize WebGPU (falls back to WebGL2)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, design).await {
            Ok(render_state) => web_game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device, running without canvas: {}", e),
        }

        setup_buttons(web_game.clone());
        setup_keyboard(web_game.clone());
        setup_resize();

        // Start game loop
        request_animation_frame(web_game);

        log::info!("Endless Sprint running!");
    }

    fn update_hud(hud: &HudReadout) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(el) = document.get_element_by_id("speedDisplay") {
            el.set_text_content(Some(&hud.speed.to_string()));
        }
        if let Some(el) = document.get_element_by_id("distanceDisplay") {
            el.set_text_content(Some(&hud.distance.to_string()));
        }
        if let Some(el) = document
            .get_element_by_id("speedFill")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let style = el.style();
            let _ = style.set_property("width", &format!("{}%", hud.fill_percent));
            let _ = style.set_property("background", &hud.color);
        }
    }

    /// Hold-to-move buttons (mouse and touch)
    fn setup_buttons(web_game: Rc<RefCell<WebGame>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, dir) in [("leftBtn", Direction::Left), ("rightBtn", Direction::Right)] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing control button #{}", id);
                continue;
            };

            for (event_name, event, prevent_default) in [
                ("mousedown", InputEvent::Press(dir), false),
                ("mouseup", InputEvent::Release(dir), false),
                ("touchstart", InputEvent::Press(dir), true),
                ("touchend", InputEvent::Release(dir), false),
            ] {
                let web_game = web_game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |e: web_sys::Event| {
                    if prevent_default {
                        e.prevent_default();
                    }
                    web_game.borrow_mut().game.handle(event);
                });
                let _ = btn
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Arrow keys
    fn setup_keyboard(web_game: Rc<RefCell<WebGame>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    let input = if pressed {
                        InputEvent::Press(dir)
                    } else {
                        InputEvent::Release(dir)
                    };
                    web_game.borrow_mut().game.handle(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Scale the game container to the window
    fn setup_resize() {
        let window = web_sys::window().unwrap();

        let apply_scale = || {
            let window = web_sys::window().unwrap();
            let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            let Some(scale) = display_scale(w, h) else {
                return;
            };
            if let Some(container) = window
                .document()
                .and_then(|d| d.get_element_by_id("gameContainer"))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = container
                    .style()
                    .set_property("transform", &format!("scale({})", scale));
            }
        };

        apply_scale();
        let closure = Closure::<dyn FnMut()>::new(apply_scale);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(web_game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>, time: f64) {
        web_game.borrow_mut().frame(time);
        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::convert::Infallible;

    use serde::Serialize;

    use endless_sprint::renderer::scene;
    use endless_sprint::sim::{Direction, GameState, InputEvent};
    use endless_sprint::{FrameRenderer, Game, HudReadout, Tuning};

    /// Builds every frame's geometry without a GPU
    #[derive(Default)]
    struct SceneCounter {
        frames: u64,
        vertices: u64,
    }

    impl FrameRenderer for SceneCounter {
        type Error = Infallible;

        fn render(&mut self, state: &GameState, time_ms: f64) -> Result<(), Infallible> {
            self.frames += 1;
            self.vertices += scene::build(state, time_ms).len() as u64;
            Ok(())
        }
    }

    #[derive(Serialize)]
    struct Report {
        ticks: u64,
        player_x: f32,
        segments: usize,
        avg_vertices_per_frame: u64,
        hud: HudReadout,
    }

    /// Scripted run: sprint right, coast, turn back, coast to a stop
    const SCRIPT: [(Option<Direction>, u32); 4] = [
        (Some(Direction::Right), 240),
        (None, 120),
        (Some(Direction::Left), 120),
        (None, 240),
    ];

    pub fn run(tuning_path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
        let tuning = match tuning_path {
            Some(path) => Tuning::from_json(&std::fs::read_to_string(&path)?)?,
            None => Tuning::default(),
        };

        let mut game = Game::new(tuning, 0x5eed)?;
        let mut renderer = SceneCounter::default();
        let frame_ms = 1000.0 / f64::from(game.state().tuning.ticks_per_second);

        for (held, ticks) in SCRIPT {
            for dir in [Direction::Left, Direction::Right] {
                game.handle(if held == Some(dir) {
                    InputEvent::Press(dir)
                } else {
                    InputEvent::Release(dir)
                });
            }
            for _ in 0..ticks {
                let time_ms = renderer.frames as f64 * frame_ms;
                let Ok(()) = game.on_frame(&mut renderer, time_ms);
            }
            let hud = game.hud();
            log::info!(
                "After {:?} x{}: speed={} distance={} x={:.1}",
                held,
                ticks,
                hud.speed,
                hud.distance,
                game.state().player.pos.x
            );
        }

        let report = Report {
            ticks: game.state().time_ticks,
            player_x: game.state().player.pos.x,
            segments: game.state().world.len(),
            avg_vertices_per_frame: renderer.vertices / renderer.frames.max(1),
            hud: game.hud(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Endless Sprint (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    if let Err(e) = headless::run(std::env::args().nth(1)) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
