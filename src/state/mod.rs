// ============================================================================
// STATE MODULE - State Management con Rc<Cell/RefCell>
// ============================================================================

pub mod navigation_state;

pub use navigation_state::*;
