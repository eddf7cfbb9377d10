//! Full-screen login/registration overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted while [`AuthState::is_gated`]. Form submissions go straight to
//! the auth state operations, which persist through `localStorage` and
//! report failures with blocking dialogs.

use leptos::prelude::*;

use crate::app::browser_session;
use crate::config::StorefrontConfig;
use crate::state::auth::{AuthPhase, AuthState};
use crate::util::notify::BrowserDialogs;

#[component]
pub fn AuthGate() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = browser_session(config);
        let email = login_email.get_untracked();
        let password = login_password.get_untracked();
        auth.update(|a| {
            if let Err(e) = a.submit_login(&session, &email, &password, &BrowserDialogs) {
                log::debug!("login rejected: {e}");
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = browser_session(config);
        let name = reg_name.get_untracked();
        let email = reg_email.get_untracked();
        let password = reg_password.get_untracked();
        auth.update(|a| {
            a.submit_registration(&session, &name, &email, &password, &BrowserDialogs);
        });
    };

    let showing_register = move || auth.get().phase == AuthPhase::RegisterForm;

    view! {
        <div id="auth-overlay" class="auth-overlay">
            <div id="login-card" class="auth-card" class:hidden=showing_register>
                <h1>"Sign in"</h1>
                <form id="login-form" class="auth-form" on:submit=on_login>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || login_email.get()
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                    <input
                        id="login-password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || login_password.get()
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                    <button class="btn auth-form__submit" type="submit">"Sign in"</button>
                </form>
                <button id="go-register" class="link-button" on:click=move |_| auth.update(AuthState::show_register)>
                    "No account? Register"
                </button>
            </div>
            <div id="register-card" class="auth-card" class:hidden=move || !showing_register()>
                <h1>"Create account"</h1>
                <form id="register-form" class="auth-form" on:submit=on_register>
                    <input
                        id="reg-name"
                        type="text"
                        placeholder="Name"
                        prop:value=move || reg_name.get()
                        on:input=move |ev| reg_name.set(event_target_value(&ev))
                    />
                    <input
                        id="reg-email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        id="reg-password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <button class="btn auth-form__submit" type="submit">"Register"</button>
                </form>
                <button id="go-login" class="link-button" on:click=move |_| auth.update(AuthState::show_login)>
                    "Already registered? Sign in"
                </button>
            </div>
        </div>
    }
}
