// ============================================================================
// ROUTER VIEWMODEL - hash -> ruta -> fetch -> región de contenido
// ============================================================================
// Lógica de navegación sin DOM: el fetch va por FragmentSource y los
// efectos visuales por NavigationView. El shell del navegador (app.rs)
// solo lee window.location.hash y hace spawn_local de navigate().
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::Route;
use crate::services::FragmentSource;
use crate::state::NavigationState;
use crate::utils::constants::ERROR_FRAGMENT;

/// Efectos visuales de una navegación
pub trait NavigationView {
    /// Reemplazar el markup de la región de contenido
    fn render_content(&self, html: &str);
    /// Marcar como activo el link `data-link=link_key` y limpiar los demás
    fn highlight_link(&self, link_key: &str);
}

/// Resultado de una navegación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Fragmento inyectado
    Loaded(Route),
    /// Fetch fallido, se mostró el fragmento de error
    Failed(Route),
    /// Llegó después de una navegación más nueva; DOM sin tocar
    Stale(Route),
}

pub struct Router<S, V> {
    source: Rc<S>,
    view: Rc<V>,
    state: NavigationState,
    discard_stale: bool,
}

impl<S, V> Clone for Router<S, V> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            view: self.view.clone(),
            state: self.state.clone(),
            discard_stale: self.discard_stale,
        }
    }
}

impl<S: FragmentSource, V: NavigationView> Router<S, V> {
    pub fn new(source: S, view: V, state: NavigationState) -> Self {
        Self {
            source: Rc::new(source),
            view: Rc::new(view),
            state,
            discard_stale: CONFIG.discard_stale_responses,
        }
    }

    /// Con `false` vuelve al comportamiento "gana el último en resolver"
    pub fn with_stale_guard(mut self, enabled: bool) -> Self {
        self.discard_stale = enabled;
        self
    }

    pub fn resolve(hash: &str) -> Route {
        Route::from_hash(hash)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Navegar al hash dado. Nunca falla: los errores se renderizan.
    pub async fn navigate(&self, hash: &str) -> NavigationOutcome {
        let route = Self::resolve(hash);
        let token = self.state.begin();
        log::info!("🧭 [ROUTER] {:?} -> {} ({:?})", hash, route.path(), token);

        let result = self.source.fetch_fragment(route.path()).await;

        if self.discard_stale && !self.state.is_latest(token) {
            log::debug!("⏭️ [ROUTER] Respuesta obsoleta para {}, descartada", route.path());
            return NavigationOutcome::Stale(route);
        }

        let outcome = match result {
            Ok(html) => {
                self.view.render_content(&html);
                log::info!("✅ [ROUTER] {} cargado ({} bytes)", route.path(), html.len());
                NavigationOutcome::Loaded(route)
            }
            Err(e) => {
                log::error!("❌ [ROUTER] Error cargando {}: {}", route.path(), e);
                self.view.render_content(ERROR_FRAGMENT);
                NavigationOutcome::Failed(route)
            }
        };

        self.view.highlight_link(route.link_key());
        self.state.set_current_route(route);
        outcome
    }
}
