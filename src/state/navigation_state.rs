// ============================================================================
// NAVIGATION STATE - Token por navegación + ruta actual
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::Route;

/// Identifica una navegación concreta; solo la más reciente puede tocar el DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NavigationToken(u64);

/// Estado de navegación compartido entre el listener de hashchange y los futures
#[derive(Clone, Default)]
pub struct NavigationState {
    latest_token: Rc<Cell<u64>>,
    current_route: Rc<RefCell<Option<Route>>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitir token para una navegación nueva (invalida los anteriores)
    pub fn begin(&self) -> NavigationToken {
        let next = self.latest_token.get() + 1;
        self.latest_token.set(next);
        NavigationToken(next)
    }

    pub fn is_latest(&self, token: NavigationToken) -> bool {
        self.latest_token.get() == token.0
    }

    pub fn set_current_route(&self, route: Route) {
        *self.current_route.borrow_mut() = Some(route);
    }

    /// Última ruta aplicada al DOM (None antes de la primera carga)
    pub fn current_route(&self) -> Option<Route> {
        *self.current_route.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let state = NavigationState::new();
        let first = state.begin();
        assert!(state.is_latest(first));

        let second = state.begin();
        assert!(second > first);
        assert!(!state.is_latest(first));
        assert!(state.is_latest(second));
    }

    #[test]
    fn clones_share_tokens_and_route() {
        let state = NavigationState::new();
        let shared = state.clone();
        let token = state.begin();
        shared.set_current_route(Route::Attendance);

        assert!(shared.is_latest(token));
        assert_eq!(state.current_route(), Some(Route::Attendance));
    }
}
