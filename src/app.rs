//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::StorefrontConfig;
use crate::pages::storefront::StorefrontPage;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogsState;
use crate::state::nav::NavState;
use crate::state::project::ProjectState;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// Session store over browser `localStorage` under the configured key.
pub fn browser_session(config: StoredValue<StorefrontConfig>) -> SessionStore<LocalStorage> {
    config.with_value(|c| SessionStore::new(LocalStorage, &c.storage_key))
}

/// Root application component.
///
/// Loads the embedded config, restores the persisted session, and provides
/// every component state as a context signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match StorefrontConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("storefront config rejected: {e}");
            return view! { <p class="config-error">{e.to_string()}</p> }.into_any();
        }
    };

    let session = SessionStore::new(LocalStorage, &config.storage_key);
    let auth = RwSignal::new(AuthState::load(&session));
    let nav = RwSignal::new(NavState::from_config(&config));
    let catalogs = RwSignal::new(CatalogsState::from_config(&config));
    let project = RwSignal::new(ProjectState::default());
    let config = StoredValue::new(config);

    provide_context(config);
    provide_context(auth);
    provide_context(nav);
    provide_context(catalogs);
    provide_context(project);

    view! {
        <Title text="Project Builder"/>
        <StorefrontPage/>
    }
    .into_any()
}
