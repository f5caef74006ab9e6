pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, FragmentSource};
pub use error::FetchError;
