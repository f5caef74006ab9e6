// ============================================================================
// LAYOUT - Sidebar, submenús, dropdown de perfil y hover de navegación
// ============================================================================
// Cada pieza es un listener que alterna clases CSS. Si falta el elemento
// en la página, esa pieza simplemente no se registra.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::config::CONFIG;
use crate::dom::{
    add_class, document, get_attribute, get_element_by_id, has_class, on_click, on_event, on_hover,
    query_selector_all, query_within, remove_class, toggle_class,
};
use crate::utils::constants::{
    ACTIVE_MARKER_CLASS, HIDDEN_CLASS, HOVER_TRANSITION_CLASSES, PROFILE_BUTTON_ID,
    PROFILE_MENU_ID, SIDEBAR_HIDDEN_CLASS, SIDEBAR_ID, SIDEBAR_TOGGLE_ID, SUBMENU_OPEN_CLASS,
};

/// Qué hacer con el menú de perfil tras un click en el documento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

/// Click dentro del botón de perfil alterna; fuera, cierra
pub fn profile_menu_action(clicked_inside: bool) -> MenuAction {
    if clicked_inside {
        MenuAction::Toggle
    } else {
        MenuAction::Close
    }
}

/// Clases del hover: el mismo resaltado que usa el link activo + transición
pub fn hover_classes(highlight_class: &str) -> Vec<&str> {
    std::iter::once(highlight_class)
        .chain(HOVER_TRANSITION_CLASSES)
        .collect()
}

/// Registrar todos los toggles del layout
pub fn bind_layout() -> Result<(), JsValue> {
    bind_sidebar_toggle()?;
    let submenus = bind_submenus()?;
    bind_profile_dropdown()?;
    let links = bind_nav_hover()?;
    log::info!("🧩 [LAYOUT] Listo: {} submenús, {} links de navegación", submenus, links);
    Ok(())
}

fn bind_sidebar_toggle() -> Result<(), JsValue> {
    let (Some(toggle), Some(sidebar)) = (get_element_by_id(SIDEBAR_TOGGLE_ID), get_element_by_id(SIDEBAR_ID)) else {
        log::debug!("[LAYOUT] Sin #{} o #{}, sidebar fijo", SIDEBAR_TOGGLE_ID, SIDEBAR_ID);
        return Ok(());
    };

    on_click(&toggle, move |_e| {
        let _ = toggle_class(&sidebar, SIDEBAR_HIDDEN_CLASS);
    })
}

/// `button[data-target]`: abre/cierra el submenú y cambia el icono +/-
fn bind_submenus() -> Result<usize, JsValue> {
    let buttons = query_selector_all("button[data-target]")?;
    let count = buttons.len();

    for button in buttons {
        let target_id = get_attribute(&button, "data-target").unwrap_or_default();
        let plus = query_within(&button, ".plus-icon")?;
        let minus = query_within(&button, ".minus-icon")?;

        on_click(&button, move |_e| {
            let Some(target) = get_element_by_id(&target_id) else {
                log::warn!("⚠️ [LAYOUT] Submenú #{} no existe", target_id);
                return;
            };
            let _ = toggle_class(&target, SUBMENU_OPEN_CLASS);
            for icon in [&plus, &minus].into_iter().flatten() {
                let _ = toggle_class(icon, HIDDEN_CLASS);
            }
        })?;
    }

    Ok(count)
}

fn bind_profile_dropdown() -> Result<(), JsValue> {
    let (Some(button), Some(menu)) = (get_element_by_id(PROFILE_BUTTON_ID), get_element_by_id(PROFILE_MENU_ID)) else {
        return Ok(());
    };
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    on_event(&doc, "click", move |event| {
        let clicked_inside = event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .map(|node| button.contains(Some(&node)))
            .unwrap_or(false);

        match profile_menu_action(clicked_inside) {
            MenuAction::Toggle => {
                let _ = toggle_class(&menu, HIDDEN_CLASS);
            }
            MenuAction::Close => {
                let _ = add_class(&menu, HIDDEN_CLASS);
            }
        }
    })
}

/// Hover en `nav a`; al salir se conserva el resaltado del link activo
fn bind_nav_hover() -> Result<usize, JsValue> {
    let links = query_selector_all("nav a")?;
    let count = links.len();

    for link in links {
        let entered: Element = link.clone();
        let left: Element = link.clone();
        let highlight = CONFIG.active_link_class.clone();
        let unhighlight = highlight.clone();
        on_hover(
            &link,
            move || {
                for class in hover_classes(&highlight) {
                    let _ = add_class(&entered, class);
                }
            },
            move || {
                if !has_class(&left, ACTIVE_MARKER_CLASS) {
                    let _ = remove_class(&left, &unhighlight);
                }
            },
        )?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_inside_toggles_menu() {
        assert_eq!(profile_menu_action(true), MenuAction::Toggle);
    }

    #[test]
    fn click_outside_closes_menu() {
        assert_eq!(profile_menu_action(false), MenuAction::Close);
    }

    #[test]
    fn hover_uses_configured_highlight() {
        assert_eq!(hover_classes("bg-blue-100"), vec!["bg-blue-100", "transition", "duration-300"]);
        assert!(!hover_classes("bg-blue-100").contains(&"bg-gray-200"));
    }

    #[test]
    fn default_hover_matches_active_link_class() {
        let classes = hover_classes(&CONFIG.active_link_class);
        assert_eq!(classes[0], CONFIG.active_link_class);
    }
}
