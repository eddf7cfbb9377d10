//! Top navigation bar with section buttons and the back button.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::config::{SectionDef, StorefrontConfig};
use crate::state::nav::NavState;
use crate::util::viewport;

/// Sections that get a navigation button, in config order.
pub(crate) fn nav_sections(sections: &[SectionDef]) -> Vec<SectionDef> {
    sections.iter().filter(|s| s.nav).cloned().collect()
}

/// Navigate to `target` and scroll to the top if the view changed.
pub fn go_to_section(nav: RwSignal<NavState>, target: Option<&str>) {
    if nav.try_update(|n| n.navigate(target)).unwrap_or(false) {
        viewport::scroll_to_top();
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let buttons = config.with_value(|c| nav_sections(&c.sections));

    let on_back = move |_| {
        if nav.try_update(NavState::back).unwrap_or(false) {
            viewport::scroll_to_top();
        }
    };

    view! {
        <nav class="nav-bar">
            <button
                id="back-btn"
                class="btn nav-bar__back"
                disabled=move || !nav.get().can_go_back()
                on:click=on_back
                title="Back"
            >
                "← Back"
            </button>
            {buttons
                .into_iter()
                .map(|section| {
                    let target = section.id.clone();
                    let active_id = section.id.clone();
                    view! {
                        <button
                            class="btn nav-btn"
                            class:nav-btn--active=move || nav.get().is_visible(&active_id)
                            on:click=move |_| go_to_section(nav, Some(&target))
                        >
                            {section.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
