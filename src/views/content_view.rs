// ============================================================================
// CONTENT VIEW - Región de contenido + link activo en el DOM
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{add_class, get_attribute, get_element_by_id, query_selector_all, remove_class, set_inner_html};
use crate::utils::constants::{ACTIVE_MARKER_CLASS, NAV_LINK_ATTR};
use crate::viewmodels::NavigationView;

/// NavigationView sobre el DOM real
pub struct DomNavigationView {
    content_region_id: String,
    active_class: String,
}

impl DomNavigationView {
    pub fn new() -> Self {
        Self {
            content_region_id: CONFIG.content_region_id.clone(),
            active_class: CONFIG.active_link_class.clone(),
        }
    }

    fn set_link_state(&self, link: &web_sys::Element, active: bool) {
        for class in [self.active_class.as_str(), ACTIVE_MARKER_CLASS] {
            let _ = if active { add_class(link, class) } else { remove_class(link, class) };
        }
    }
}

impl Default for DomNavigationView {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationView for DomNavigationView {
    fn render_content(&self, html: &str) {
        match get_element_by_id(&self.content_region_id) {
            Some(region) => set_inner_html(&region, html),
            None => log::warn!("⚠️ [ROUTER] No existe #{}", self.content_region_id),
        }
    }

    /// Recorre todos los `a[data-link]`: solo el que coincide queda marcado
    fn highlight_link(&self, link_key: &str) {
        let links = match query_selector_all(&format!("a[{}]", NAV_LINK_ATTR)) {
            Ok(links) => links,
            Err(e) => {
                log::error!("❌ [ROUTER] No se pudieron leer los links: {:?}", e);
                return;
            }
        };

        let mut matched = false;
        for link in links {
            let active = !matched && is_active_link(get_attribute(&link, NAV_LINK_ATTR).as_deref(), link_key);
            matched |= active;
            self.set_link_state(&link, active);
        }
        if !matched {
            log::debug!("[ROUTER] Sin link para '{}'", link_key);
        }
    }
}

/// Un link está activo si su `data-link` es exactamente la clave de la ruta
pub fn is_active_link(data_link: Option<&str>, link_key: &str) -> bool {
    data_link == Some(link_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    #[test]
    fn exactly_one_route_link_is_active() {
        for active in Route::ALL {
            let on: Vec<_> = Route::ALL
                .iter()
                .filter(|r| is_active_link(Some(r.link_key()), active.link_key()))
                .collect();
            assert_eq!(on, vec![&active]);
        }
    }

    #[test]
    fn links_without_data_link_never_activate() {
        assert!(!is_active_link(None, "dashboard"));
        assert!(!is_active_link(Some(""), "dashboard"));
        assert!(!is_active_link(Some("dashboard "), "dashboard"));
    }
}
