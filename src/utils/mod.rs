// Shared helpers

pub mod constants;
pub mod storage;
pub mod validation;
pub mod debounce;
pub mod time;

pub use constants::*;
pub use storage::*;
pub use validation::*;
pub use debounce::Debouncer;
pub use time::*;
