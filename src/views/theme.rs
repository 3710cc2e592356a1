use crate::dom::set_root_attribute;
use crate::models::Theme;

pub fn apply_theme(theme: Theme) {
    if let Err(e) = set_root_attribute("data-theme", theme.as_str()) {
        log::warn!("⚠️ [THEME] Could not apply theme: {:?}", e);
    }
}
