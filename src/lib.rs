// ============================================================================
// ADMIN SHELL - Navegación por hash + toggles del layout (RUST + WASM)
// ============================================================================
// - Models: tabla de rutas (hash -> ruta del servidor)
// - Services: SOLO comunicación HTTP
// - State: token de navegación con Rc<Cell>
// - ViewModels: Router (resolver, pedir, aplicar)
// - Views: efectos DOM (contenido, link activo, sidebar, menús)
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

pub use crate::models::Route;
pub use crate::services::{ApiClient, FetchError, FragmentSource};
pub use crate::state::{NavigationState, NavigationToken};
pub use crate::viewmodels::{NavigationOutcome, NavigationView, Router};

// Instancia global de App (una por página)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Admin shell - Rust + WASM");

    let app = App::new();
    let mounted = app.mount();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    mounted
}

/// Vista cargada actualmente (`data-link` del link activo), llamable desde JavaScript
#[wasm_bindgen]
pub fn current_view() -> Option<String> {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|app| app.state().current_route())
            .map(|route| route.link_key().to_string())
    })
}
