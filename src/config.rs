use serde::{Deserialize, Serialize};

use crate::utils::constants::{ACTIVE_LINK_CLASS, BACKEND_URL, CONTENT_REGION_ID};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub content_region_id: String,
    pub active_link_class: String,
    pub discard_stale_responses: bool,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            content_region_id: CONTENT_REGION_ID.to_string(),
            active_link_class: ACTIVE_LINK_CLASS.to_string(),
            discard_stale_responses: false,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.trim_end_matches('/').to_string(),
            content_region_id: option_env!("CONTENT_REGION_ID")
                .unwrap_or(CONTENT_REGION_ID).to_string(),
            active_link_class: option_env!("ACTIVE_LINK_CLASS")
                .unwrap_or(ACTIVE_LINK_CLASS).to_string(),
            discard_stale_responses: parse_flag(option_env!("DISCARD_STALE_RESPONSES"), false),
            enable_logging: parse_flag(option_env!("ENABLE_LOGGING"), true),
        }
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_same_origin() {
        let config = AppConfig::default();
        assert!(config.backend_url.is_empty());
        assert_eq!(config.content_region_id, "main-content");
        // "gana el último en resolver" salvo DISCARD_STALE_RESPONSES=true
        assert!(!config.discard_stale_responses);
    }

    #[test]
    fn flags_fall_back_on_garbage() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("false"), true));
        assert!(parse_flag(Some(" true "), false));
        assert!(parse_flag(Some("yes"), true));
    }

    #[test]
    fn logging_flag_controls_level() {
        let quiet = AppConfig { enable_logging: false, ..AppConfig::default() };
        assert_eq!(quiet.log_level(), log::Level::Warn);
        assert_eq!(AppConfig::default().log_level(), log::Level::Debug);
    }
}
