// ============================================================================
// CONSTANTES - IDs del DOM, clases CSS y fragmentos fijos
// ============================================================================

/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: "" (mismo origen que la página admin)
/// - Otro host: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Región de contenido donde se inyectan los fragmentos
pub const CONTENT_REGION_ID: &str = "main-content";

/// Clase de resaltado del link activo (también la usa el hover)
pub const ACTIVE_LINK_CLASS: &str = "bg-gray-200";

/// Marcador del link activo; el hover no quita el resaltado si está presente
pub const ACTIVE_MARKER_CLASS: &str = "active";

/// Atributo de los links de navegación (`<a data-link="attendance">`)
pub const NAV_LINK_ATTR: &str = "data-link";

/// Fragmento fijo mostrado cuando falla la carga
pub const ERROR_FRAGMENT: &str = "<p class='text-red-600'>Error loading content.</p>";

// Layout
pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";
pub const SIDEBAR_HIDDEN_CLASS: &str = "-translate-x-full";
pub const PROFILE_BUTTON_ID: &str = "profile-button";
pub const PROFILE_MENU_ID: &str = "profile-menu";
pub const SUBMENU_OPEN_CLASS: &str = "open";
pub const HIDDEN_CLASS: &str = "hidden";
pub const HOVER_TRANSITION_CLASSES: [&str; 2] = ["transition", "duration-300"];
