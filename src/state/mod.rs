// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod request_tracker;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use request_tracker::*;
pub use app_state::*;
