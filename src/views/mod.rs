pub mod form;
pub mod form_view;
pub mod status_panel;
pub mod theme;

pub use form::{click_if_enabled, FormBindings};
pub use form_view::{render_form, render_otp_validity, render_username_validity, FormView};
pub use status_panel::{render_message, render_status_card, StatusCard};
pub use theme::apply_theme;
