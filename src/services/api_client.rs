// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Pide fragmentos HTML a las rutas fijas del servidor.
// Sin reintentos, sin caché, sin timeout.
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::services::error::FetchError;

/// Origen de fragmentos HTML (el router depende de esto, no de gloo-net)
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentSource for ApiClient {
    /// GET del fragmento; status no-2xx cuenta como fallo
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        log::debug!("📡 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let api = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(api.url_for("/teachers-login"), "http://localhost:5000/teachers-login");
    }

    #[test]
    fn empty_base_keeps_relative_path() {
        assert_eq!(ApiClient::with_base_url("").url_for("/students"), "/students");
    }

    #[test]
    fn status_error_message() {
        let err = FetchError::Status { status: 500, status_text: "INTERNAL SERVER ERROR".into() };
        assert_eq!(err.to_string(), "HTTP 500: INTERNAL SERVER ERROR");
    }
}
