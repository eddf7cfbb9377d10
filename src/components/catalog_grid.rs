//! Catalog section: category/sort controls over a grid of part cards.
//!
//! DESIGN
//! ======
//! The grid is a keyed `<For>` over the catalog's render order, keyed by
//! base index, so a filter change moves existing card nodes instead of
//! rebuilding them.

#[cfg(test)]
#[path = "catalog_grid_test.rs"]
mod catalog_grid_test;

use leptos::prelude::*;

use crate::components::part_card::PartCard;
use crate::config::{CategoryDef, StorefrontConfig};
use crate::state::catalog::{ALL_CATEGORIES, Card, CatalogsState, SortMode};
use crate::state::project::ProjectState;
use crate::util::format::format_price;
use crate::util::notify::BrowserDialogs;

/// Options for the sort control as `(value, label)`.
pub(crate) const SORT_OPTIONS: [(SortMode, &str); 3] = [
    (SortMode::Default, "Default order"),
    (SortMode::Asc, "Price: low to high"),
    (SortMode::Desc, "Price: high to low"),
];

/// Options for the category control, led by the "all" entry.
pub(crate) fn category_options(categories: &[CategoryDef]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_owned(), "All categories".to_owned()))
        .chain(categories.iter().map(|c| (c.value.clone(), c.label.clone())))
        .collect()
}

/// Visible cards of catalog `index` in display order, keyed by base index.
pub(crate) fn visible_cards(catalogs: &CatalogsState, index: usize) -> Vec<(usize, Card)> {
    catalogs
        .get(index)
        .map(|catalog| catalog.visible().into_iter().map(|(i, card)| (i, card.clone())).collect())
        .unwrap_or_default()
}

#[component]
pub fn CatalogGrid(index: usize) -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let catalogs = expect_context::<RwSignal<CatalogsState>>();
    let project = expect_context::<RwSignal<ProjectState>>();

    let (title, categories) = catalogs.with_untracked(|c| {
        c.get(index)
            .map(|catalog| (catalog.title.clone(), category_options(&catalog.categories)))
            .unwrap_or_default()
    });

    let selected_category = move || {
        catalogs.with(|c| c.get(index).map_or_else(|| ALL_CATEGORIES.to_owned(), |cat| cat.category().to_owned()))
    };
    let selected_sort = move || catalogs.with(|c| c.get(index).map_or(SortMode::Default, |cat| cat.sort()).as_str());

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        catalogs.update(|c| {
            if let Some(catalog) = c.get_mut(index) {
                catalog.set_category(&value);
            }
        });
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let mode = SortMode::parse(&event_target_value(&ev));
        catalogs.update(|c| {
            if let Some(catalog) = c.get_mut(index) {
                catalog.set_sort(mode);
            }
        });
    };

    let on_add = Callback::new(move |card: Card| {
        project.update(|p| p.add_part(&card.name, card.price, &BrowserDialogs));
    });

    view! {
        <div class="catalog">
            <div class="catalog__controls">
                <span class="catalog__title">{title}</span>
                <select class="filter-category" prop:value=selected_category on:change=on_category>
                    {categories
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select class="filter-sort" prop:value=selected_sort on:change=on_sort>
                    {SORT_OPTIONS
                        .iter()
                        .map(|(mode, label)| view! { <option value=mode.as_str()>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="catalog-grid">
                <For
                    each=move || catalogs.with(|c| visible_cards(c, index))
                    key=|(i, _)| *i
                    children=move |(_, card)| {
                        let price_label = config.with_value(|c| format_price(card.price, &c.format));
                        view! { <PartCard card=card price_label=price_label on_add=on_add/> }
                    }
                />
            </div>
        </div>
    }
}
