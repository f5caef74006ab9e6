pub mod content_view;
pub mod layout;

pub use content_view::DomNavigationView;
pub use layout::bind_layout;
