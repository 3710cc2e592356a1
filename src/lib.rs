// ============================================================================
// BITS VERIFY - Discord <-> institutional email verification page (pure Rust)
// ============================================================================
// Layout:
// - Views: DOM rendering, no flow logic
// - ViewModels: verification flow + cooldown
// - Services: HTTP only
// - State: Rc<RefCell> state with change notifications
// - Models: session record and API shapes
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Keeps the controller (and its timers) alive for the lifetime of the page
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 BITS verification client starting");

    let app = App::new()?;
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}
