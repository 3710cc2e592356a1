// ============================================================================
// DOM MODULE - DOM manipulation helpers
// ============================================================================

pub mod element;
pub mod events;

pub use element::*;
pub use events::*;
