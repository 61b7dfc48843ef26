//! WebAssembly FFI bindings for the Crux Core
//!
//! Interface between the onboarding form shell (JavaScript) and the Crux Core:
//! form events go in, render effects and the derived view model come out.
//! Bridge failures are logged and answered with an empty buffer.

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
/// Runs when the WASM module is loaded. A second initialisation (e.g. after a
/// hot reload of the shell) keeps the logger that is already installed.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Process a form event from JavaScript
///
/// Takes a bincode-serialized Event and returns bincode-serialized Effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("Failed to process form event: {e:?}");
        effects.clear();
    }
    effects
}

/// Get the current view model (form values plus provisioning gate)
///
/// Returns a bincode-serialized ViewModel.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("Failed to serialize view model: {e:?}");
        view.clear();
    }
    view
}

/// Handle a shell response to a render effect
///
/// Takes an effect ID and bincode-serialized response data.
/// Returns bincode-serialized Effects that should be processed.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(EffectId(id), response_bytes, &mut effects) {
        log::error!("Failed to resolve effect {id}: {e:?}");
        effects.clear();
    }
    effects
}
