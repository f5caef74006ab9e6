// ============================================================================
// APP - Shell del navegador: layout + router por hash
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, location_hash, on_event, window};
use crate::models::Route;
use crate::services::ApiClient;
use crate::state::NavigationState;
use crate::viewmodels::Router;
use crate::views::{bind_layout, DomNavigationView};

pub type ShellRouter = Router<ApiClient, DomNavigationView>;

thread_local! {
    // hashchange es global: un solo registro por página
    static HASHCHANGE_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Aplicación principal
pub struct App {
    router: ShellRouter,
}

impl App {
    pub fn new() -> Self {
        let router = Router::new(ApiClient::new(), DomNavigationView::new(), NavigationState::new());
        Self { router }
    }

    /// Registrar toggles y arrancar la navegación.
    /// El layout se registra aunque falte la región de contenido.
    pub fn mount(&self) -> Result<(), JsValue> {
        mount_in_order(bind_layout, || self.start_router())
    }

    pub fn state(&self) -> &NavigationState {
        self.router.state()
    }

    /// Carga inicial + listener de hashchange; falla si no hay región de contenido
    fn start_router(&self) -> Result<(), JsValue> {
        get_element_by_id(&CONFIG.content_region_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", CONFIG.content_region_id)))?;

        if HASHCHANGE_BOUND.with(|bound| bound.replace(true)) {
            log::warn!("⚠️ [APP] start_router ya fue llamado, ignorando llamada duplicada");
            return Ok(());
        }

        spawn_navigation(&self.router, initial_hash(&location_hash()));

        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
        let router = self.router.clone();
        on_event(&win, "hashchange", move |_e| {
            spawn_navigation(&router, location_hash());
        })?;

        log::info!("✅ [APP] Router activo (hashchange registrado)");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Ejecuta layout y router siempre, en ese orden; devuelve el primer error
fn mount_in_order<E, L, R>(layout: L, router: R) -> Result<(), E>
where
    L: FnOnce() -> Result<(), E>,
    R: FnOnce() -> Result<(), E>,
{
    let layout = layout();
    let router = router();
    layout.and(router)
}

/// Hash vacío en la carga inicial equivale a #dashboard
fn initial_hash(current: &str) -> String {
    if current.is_empty() {
        Route::Dashboard.hash().to_string()
    } else {
        current.to_string()
    }
}

fn spawn_navigation(router: &ShellRouter, hash: String) {
    let router = router.clone();
    wasm_bindgen_futures::spawn_local(async move {
        router.navigate(&hash).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn empty_initial_hash_becomes_dashboard() {
        assert_eq!(initial_hash(""), "#dashboard");
        assert_eq!(initial_hash("#attendance"), "#attendance");
    }

    #[test]
    fn layout_binds_even_when_router_cannot_start() {
        let steps = RefCell::new(Vec::new());

        let result = mount_in_order(
            || {
                steps.borrow_mut().push("layout");
                Ok(())
            },
            || {
                steps.borrow_mut().push("router");
                Err("No #main-content element found")
            },
        );

        assert_eq!(result, Err("No #main-content element found"));
        assert_eq!(*steps.borrow(), vec!["layout", "router"]);
    }

    #[test]
    fn router_starts_even_when_layout_fails() {
        let router_started = Cell::new(false);

        let result = mount_in_order(
            || Err("layout"),
            || {
                router_started.set(true);
                Ok(())
            },
        );

        assert_eq!(result, Err("layout"));
        assert!(router_started.get());
    }
}
