//! Signed-in user's profile with avatar glyph and logout.

use leptos::prelude::*;

use crate::app::browser_session;
use crate::config::StorefrontConfig;
use crate::state::auth::AuthState;
use crate::util::viewport;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let profile = Memo::new(move |_| auth.with(AuthState::profile));

    let on_logout = move |_| {
        let session = browser_session(config);
        auth.update(|a| a.logout(&session));
        viewport::reload();
    };

    view! {
        <div class="profile">
            <div class="profile__header">
                <span id="avatar-letter" class="profile__avatar">{move || profile.get().avatar}</span>
                <h3 id="user-name-title" class="profile__title">{move || profile.get().name}</h3>
            </div>
            <dl class="profile__fields">
                <dt>"Name"</dt>
                <dd id="profile-name">{move || profile.get().name}</dd>
                <dt>"Email"</dt>
                <dd id="profile-email">{move || profile.get().email}</dd>
            </dl>
            <button id="logout-btn" class="btn profile__logout" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
