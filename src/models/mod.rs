pub mod status;
pub mod session;
pub mod verification;
pub mod theme;

pub use status::VerificationStatus;
pub use session::Session;
pub use verification::{ErrorBody, MessageResponse, StatusResponse};
pub use theme::Theme;
