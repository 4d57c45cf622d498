//! WebAssembly FFI bindings for the Crux Core
//!
//! The browser shell serializes events with bincode, passes them in and
//! performs the returned effects:
//! - `Render`: re-read [`view`] and update `mac-address`, `add-button` and
//!   `result-message` (the feedback kind is the CSS class to apply)
//! - `Http`: strip [`crate::BASE_URL`] from the URL and `fetch()` it
//! - `Timer`: `setTimeout` for the requested milliseconds, then resolve
//!   with `TimerOutput::Elapsed` carrying the same id

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Initialize the WASM module and set up logging
///
/// This runs automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    // A second init (e.g. hot reload) keeps the first logger
    if console_log::init_with_level(level).is_err() {
        log::warn!("console logger already initialized");
    }
}

/// Process an event from JavaScript
///
/// Takes a bincode-serialized Event and returns bincode-serialized Effects.
/// Undecodable events are logged and produce no effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e}");
        effects.clear();
    }
    effects
}

/// Get the current view model
///
/// Returns a bincode-serialized ViewModel.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to serialize view model: {e}");
        view.clear();
    }
    view
}

/// Handle a response to an effect (fetch result or elapsed timer)
///
/// Returns bincode-serialized Effects that should be processed.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(EffectId(id), response_bytes, &mut effects) {
        log::error!("failed to resolve effect {id}: {e}");
        effects.clear();
    }
    effects
}
