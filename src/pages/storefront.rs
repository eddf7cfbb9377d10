//! The storefront page: auth gate, navigation bar, and every section.
//!
//! SYSTEM CONTEXT
//! ==============
//! All sections are rendered once; only the one [`NavState`] marks visible
//! carries the active class. The auth gate overlays everything until the
//! user signs in.

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::catalog_grid::CatalogGrid;
use crate::components::nav_bar::NavBar;
use crate::components::profile_card::ProfileCard;
use crate::components::project_panel::ProjectPanel;
use crate::components::quick_links::QuickLinks;
use crate::config::{SectionDef, SectionKind, StorefrontConfig};
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogsState;
use crate::state::nav::NavState;

/// Indices of the catalogs rendered inside `section`, in config order.
pub(crate) fn catalog_indices(catalogs: &CatalogsState, section: &str) -> Vec<usize> {
    catalogs
        .catalogs
        .iter()
        .enumerate()
        .filter(|(_, c)| c.section == section)
        .map(|(i, _)| i)
        .collect()
}

/// Storefront page with every section mounted.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let sections = config.with_value(|c| c.sections.clone());

    view! {
        <Show when=move || auth.get().is_gated()>
            <AuthGate/>
        </Show>
        <div class="storefront" class:storefront--gated=move || auth.get().is_gated()>
            <NavBar/>
            <main class="storefront__sections">
                {sections.into_iter().map(|section| view! { <SectionView section=section/> }).collect::<Vec<_>>()}
            </main>
        </div>
    }
}

/// One section wrapper; content depends on its kind.
#[component]
fn SectionView(section: SectionDef) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let catalogs = expect_context::<RwSignal<CatalogsState>>();

    let id = section.id.clone();
    let visible_id = section.id.clone();
    let is_active = move || nav.get().is_visible(&visible_id);

    let body = match section.kind {
        SectionKind::Dashboard => view! { <QuickLinks/> }.into_any(),
        SectionKind::Project => view! { <ProjectPanel/> }.into_any(),
        SectionKind::Profile => view! { <ProfileCard/> }.into_any(),
        SectionKind::Catalog => {
            let indices = catalogs.with_untracked(|c| catalog_indices(c, &section.id));
            indices
                .into_iter()
                .map(|index| view! { <CatalogGrid index=index/> })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <section id=id class="section" class:active=is_active>
            <h2 class="section__title">{section.label.clone()}</h2>
            {body}
        </section>
    }
}
