// ============================================================================
// APP - Binds the page, owns the state and wires the listeners
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::{resolve_base_url, CONFIG};
use crate::dom::{navigate, on_blur, on_click, on_enter, on_input, page_location, prefers_light_scheme};
use crate::models::Theme;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::constants::BACK_LINK;
use crate::utils::debounce::Debouncer;
use crate::utils::storage::{KeyValueStore, LocalStorage};
use crate::utils::time::now_ms;
use crate::viewmodels::{CooldownTimer, UiEffect, VerificationViewModel};
use crate::views::{
    apply_theme, click_if_enabled, render_form, render_message, render_otp_validity,
    render_status_card, render_username_validity, FormBindings, FormView, StatusCard,
};

pub struct App {
    state: AppState,
    form: Rc<FormBindings>,
    vm: VerificationViewModel,
    cooldown: CooldownTimer,
    email_debounce: Debouncer,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let storage: Rc<dyn KeyValueStore> = Rc::new(LocalStorage);
        let theme = Theme::initial(storage.as_ref(), prefers_light_scheme());
        apply_theme(theme);

        let state = AppState::new(storage, theme);
        let form = Rc::new(FormBindings::bind());
        let cooldown = CooldownTimer::new(state.cooldown.clone());

        let base_url = resolve_base_url(&CONFIG, &page_location());
        log::info!("🌐 [APP] Verification API base: '{}'", base_url);

        let vm = {
            let form = form.clone();
            let cooldown = cooldown.clone();
            VerificationViewModel::new(state.clone(), ApiClient::new(base_url), CONFIG.clone(), move |effect| {
                apply_effect(&form, &cooldown, effect)
            })
        };

        Ok(Self {
            state,
            form,
            vm,
            cooldown,
            email_debounce: Debouncer::new(CONFIG.debounce_ms),
        })
    }

    /// Hydrate the page, attach listeners, resume any cooldown and reconcile with the server
    pub fn start(&self) -> Result<(), JsValue> {
        self.subscribe_renders();

        let session = self.state.session.get();
        self.form.set_username_value(&session.username);
        self.form.set_email_value(&session.email);
        render_username_validity(&self.form);
        render_otp_validity(&self.form);
        rerender_form(&self.state, &self.form);

        self.attach_listeners()?;

        if self.vm.resume(now_ms()) {
            log::info!("🔄 [APP] Restored status '{}', polling server", session.status());
            let vm = self.vm.clone();
            spawn_local(async move {
                vm.check_status(Some(session.email), None).await;
            });
        }
        Ok(())
    }

    fn subscribe_renders(&self) {
        {
            let state = self.state.clone();
            let form = self.form.clone();
            self.state.session.subscribe(move || rerender_form(&state, &form));
        }
        {
            let state = self.state.clone();
            let form = self.form.clone();
            self.state.cooldown.subscribe(move || rerender_form(&state, &form));
        }
        {
            let message = self.state.message.clone();
            let form = self.form.clone();
            self.state.message.subscribe(move || {
                if let Some(msg) = message.get() {
                    if let Err(e) = render_message(&form, &msg) {
                        log::error!("❌ [APP] Failed to render status message: {:?}", e);
                    }
                }
            });
        }
        {
            let theme = self.state.theme.clone();
            self.state.theme.subscribe(move || apply_theme(theme.get()));
        }
    }

    fn attach_listeners(&self) -> Result<(), JsValue> {
        let form = &self.form;

        if let Some(toggle) = &form.theme_toggle {
            let state = self.state.clone();
            on_click(toggle, move |_| {
                let theme = state.toggle_theme();
                log::info!("🎨 [APP] Theme: {}", theme.as_str());
            })?;
        }

        if let Some(input) = &form.username_input {
            let f = form.clone();
            on_input(input, move |_| render_username_validity(&f))?;

            let f = form.clone();
            on_enter(input, move || click_if_enabled(&f.submit_btn))?;

            let f = form.clone();
            let vm = self.vm.clone();
            on_blur(input, move |_| vm.username_blurred(&f.username_value()))?;
        }

        if let Some(btn) = &form.submit_btn {
            let f = form.clone();
            let vm = self.vm.clone();
            on_click(btn, move |e| {
                e.prevent_default();
                vm.submit_username(&f.username_value());
            })?;
        }

        if let Some(input) = &form.email_input {
            let state = self.state.clone();
            let f = form.clone();
            let debounce = self.email_debounce.clone();
            on_input(input, move |_| {
                let state = state.clone();
                let f = f.clone();
                debounce.call(move || rerender_form(&state, &f));
            })?;

            let f = form.clone();
            on_enter(input, move || click_if_enabled(&f.email_submit_btn))?;
        }

        if let Some(btn) = &form.email_submit_btn {
            let f = form.clone();
            let vm = self.vm.clone();
            on_click(btn, move |e| {
                e.prevent_default();
                let vm = vm.clone();
                let typed = f.email_value().unwrap_or_default();
                spawn_local(async move { vm.submit_email(&typed).await });
            })?;
        }

        if let Some(input) = &form.otp_input {
            let f = form.clone();
            on_input(input, move |_| render_otp_validity(&f))?;

            let f = form.clone();
            on_enter(input, move || click_if_enabled(&f.otp_submit_btn))?;
        }

        if let Some(btn) = &form.otp_submit_btn {
            let f = form.clone();
            let vm = self.vm.clone();
            on_click(btn, move |e| {
                e.prevent_default();
                let vm = vm.clone();
                let otp = f.otp_value();
                spawn_local(async move { vm.submit_otp(&otp).await });
            })?;
        }

        if let Some(btn) = &form.check_status_btn {
            let f = form.clone();
            let vm = self.vm.clone();
            on_click(btn, move |_| {
                let vm = vm.clone();
                let typed = f.email_value();
                spawn_local(async move { vm.check_status(None, typed).await });
            })?;
        }

        if let Some(btn) = &form.resend_otp_btn {
            let vm = self.vm.clone();
            on_click(btn, move |_| {
                let vm = vm.clone();
                spawn_local(async move { vm.request_otp().await });
            })?;
        }

        if let Some(btn) = &form.back_btn {
            on_click(btn, move |_| {
                if let Err(e) = navigate(BACK_LINK) {
                    log::error!("❌ [APP] Navigation failed: {:?}", e);
                }
            })?;
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cooldown.cancel();
        self.email_debounce.cancel();
    }
}

fn rerender_form(state: &AppState, form: &FormBindings) {
    let typed = form.email_value();
    let view = state
        .session
        .with(|session| FormView::derive(session, typed.as_deref(), state.cooldown.get()));
    if let Err(e) = render_form(form, &view) {
        log::error!("❌ [APP] Failed to render form: {:?}", e);
    }
}

fn apply_effect(form: &FormBindings, cooldown: &CooldownTimer, effect: UiEffect) {
    match effect {
        UiEffect::StartCooldown(seconds) => cooldown.start(seconds),
        UiEffect::ClearOtpInput => form.clear_otp(),
        UiEffect::SetOtpSubmitEnabled(enabled) => form.set_otp_submit_enabled(enabled),
        UiEffect::SetEmailInput(email) => form.set_email_value(&email),
        UiEffect::FocusEmailInput => form.focus_email(),
        UiEffect::ShowStatus(data) => {
            if let Err(e) = render_status_card(form, &StatusCard::from_response(&data)) {
                log::error!("❌ [APP] Failed to render status card: {:?}", e);
            }
        }
    }
}
