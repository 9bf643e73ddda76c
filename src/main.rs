//! Cookie Catcher entry point
//!
//! On the web this hooks the game into the page. Natively it plays a
//! headless session with the autopilot and prints the summary:
//!
//! ```text
//! cookie-catcher [seed] [seconds] [tuning.json]
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    cookie_catcher::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cookie_catcher::platform::{SteppedFrames, run_frames};
    use cookie_catcher::sim::autopilot;
    use cookie_catcher::{GameSession, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let seconds = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path).map(|json| Tuning::from_json(&json)) {
            Ok(Ok(tuning)) => tuning,
            Ok(Err(e)) => {
                log::error!("Bad tuning file {}: {}", path, e);
                std::process::exit(2);
            }
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Cookie Catcher (native) - autopilot run, seed {}, up to {}s", seed, seconds);

    // Same proportions as the social preview card
    let mut session = GameSession::new(1200.0, 630.0, tuning, seed);
    session.start();

    let mut frames = SteppedFrames::at_fps(60, seconds);
    let mut frame_index: u64 = 0;
    let simulated = run_frames(
        &mut session,
        &mut frames,
        |session| {
            if let Some(x) = autopilot::target_x(session.state()) {
                let origin = session.state().playfield.origin.x;
                session.on_pointer_input(origin + x);
            }
        },
        |frame| {
            frame_index += 1;
            if frame_index % 600 == 0 {
                log::debug!("Frame {}: {} draw commands", frame_index, frame.commands.len());
            }
        },
    );

    session.end();
    log::info!("Simulated {} frames", simulated);

    match serde_json::to_string_pretty(&session.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize summary: {}", e),
    }
}
