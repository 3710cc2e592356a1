pub mod cooldown;
pub mod verification_viewmodel;

pub use cooldown::{CooldownDisplay, CooldownTimer};
pub use verification_viewmodel::{UiEffect, VerificationViewModel};
