pub mod router_viewmodel;

pub use router_viewmodel::{NavigationOutcome, NavigationView, Router};
