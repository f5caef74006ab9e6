/// Fallos al obtener un fragmento HTML.
/// Para el render se tratan todos igual (fragmento de error fijo).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Body read error: {0}")]
    Body(String),
}
