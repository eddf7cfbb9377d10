//! Dashboard shortcut buttons.

use leptos::prelude::*;

use crate::components::nav_bar::go_to_section;
use crate::config::StorefrontConfig;
use crate::state::nav::NavState;

#[component]
pub fn QuickLinks() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let links = config.with_value(|c| c.quick_links.clone());

    view! {
        <div class="quick-buttons">
            {links
                .into_iter()
                .map(|link| {
                    let target = link.section.clone();
                    view! {
                        <button class="btn quick-buttons__item" on:click=move |_| go_to_section(nav, target.as_deref())>
                            {link.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
